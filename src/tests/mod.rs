mod nielsen_properties;

use crate::{FreeGroup, Symbol, Word};
use proptest::prelude::*;

const LABELS: [char; 4] = ['a', 'b', 'c', 'e'];

/// The free group on `a`, `b`, `c` with identity `e`.
pub(crate) fn abc_group() -> FreeGroup<char> {
    FreeGroup::new(LABELS.map(Word::generator), Word::generator('e'))
        .expect("fixed generator set is valid")
}

/// Maps a byte onto one of the seven symbols of [`abc_group`].
pub(crate) fn symbol_from_byte(byte: u8) -> Symbol<char> {
    match byte % 7 {
        0 => Symbol::Generator('a'),
        1 => Symbol::Generator('b'),
        2 => Symbol::Generator('c'),
        3 => Symbol::Inverse('a'),
        4 => Symbol::Inverse('b'),
        5 => Symbol::Inverse('c'),
        _ => Symbol::Generator('e'),
    }
}

pub(crate) fn symbol_strategy() -> impl Strategy<Value = Symbol<char>> {
    any::<u8>().prop_map(symbol_from_byte)
}

/// Words over [`abc_group`], identities and adjacent inverse pairs included.
pub(crate) fn word_strategy(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Word<char>> {
    prop::collection::vec(symbol_strategy(), len).prop_map(|s| s.into_iter().collect())
}
