use crate::error::NielsenError;
use crate::symbol::{Label, Symbol};
use crate::word::Word;
use ahash::AHashMap as HashMap;
use std::collections::BTreeSet;

/// A free group on a finite set of generators.
///
/// The group is the only authority on algebraic meaning: it owns the identity
/// and the involutive inverse map. Both lookup tables are built once in
/// [`FreeGroup::new`] and never change afterwards.
#[derive(Debug, Clone)]
pub struct FreeGroup<T> {
    /// Generator words of length one, identity included.
    generators: BTreeSet<Word<T>>,

    identity: Word<T>,

    /// Symbol -> inverse symbol, closed under application.
    inverses: HashMap<Symbol<T>, Symbol<T>>,

    /// Symbol -> the unique length-one word carrying it.
    letters: HashMap<Symbol<T>, Word<T>>,
}

impl<T: Label> FreeGroup<T> {
    /// Creates the free group on `generators`, with `identity` as its
    /// identity element.
    ///
    /// Every word must have length one. The identity is added to the
    /// generator set if absent. Each other generator gets a synthesized
    /// inverse symbol, so callers must not list inverses themselves.
    pub fn new<I>(generators: I, identity: Word<T>) -> Result<Self, NielsenError>
    where
        I: IntoIterator<Item = Word<T>>,
    {
        let identity_symbol = identity.label()?.clone();

        let mut generator_set = BTreeSet::new();
        for generator in generators {
            generator.label()?;
            generator_set.insert(generator);
        }
        generator_set.insert(identity.clone());

        let mut inverses = HashMap::default();
        for generator in &generator_set {
            let symbol = generator.label()?.clone();
            if symbol == identity_symbol {
                continue;
            }
            let inverse = symbol.clone().flipped();
            if generator_set.contains(&Word::from(inverse.clone())) {
                return Err(NielsenError::InverseCollision {
                    symbol: format!("{symbol:?}"),
                });
            }
            inverses.insert(inverse.clone(), symbol.clone());
            inverses.insert(symbol, inverse);
        }
        inverses.insert(identity_symbol.clone(), identity_symbol);

        let letters = inverses
            .keys()
            .map(|symbol| (symbol.clone(), Word::from(symbol.clone())))
            .collect();

        Ok(Self {
            generators: generator_set,
            identity,
            inverses,
            letters,
        })
    }

    /// Returns the generator words (identity included) in symbol order.
    pub fn generators(&self) -> &BTreeSet<Word<T>> {
        &self.generators
    }

    /// Returns the length-one identity word.
    pub fn identity(&self) -> &Word<T> {
        &self.identity
    }

    /// Returns true if `word` is exactly the identity word.
    pub fn is_identity(&self, word: &Word<T>) -> bool {
        word == &self.identity
    }

    /// Returns true if `symbol` is a generator, a synthesized inverse or the
    /// identity of this group.
    pub fn contains_symbol(&self, symbol: &Symbol<T>) -> bool {
        self.inverses.contains_key(symbol)
    }

    /// Looks up the length-one word carrying `symbol`.
    pub fn letter(&self, symbol: &Symbol<T>) -> Option<&Word<T>> {
        self.letters.get(symbol)
    }

    /// Looks up the generator word with the given label.
    pub fn generator(&self, label: &T) -> Result<Word<T>, NielsenError> {
        let symbol = Symbol::Generator(label.clone());
        self.letter(&symbol)
            .cloned()
            .ok_or_else(|| NielsenError::key_not_found(&symbol))
    }

    /// Builds a word from generator labels, checking each against the group.
    pub fn word<'a, I>(&self, labels: I) -> Result<Word<T>, NielsenError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        labels
            .into_iter()
            .map(|label| {
                let symbol = Symbol::Generator(label.clone());
                if self.contains_symbol(&symbol) {
                    Ok(symbol)
                } else {
                    Err(NielsenError::key_not_found(&symbol))
                }
            })
            .collect()
    }

    /// Returns the inverse of a single symbol.
    pub fn inverse_symbol(&self, symbol: &Symbol<T>) -> Result<&Symbol<T>, NielsenError> {
        self.inverses
            .get(symbol)
            .ok_or_else(|| NielsenError::key_not_found(symbol))
    }

    /// Returns the inverse of `word`.
    ///
    /// A length-one word is looked up directly. A longer word is inverted
    /// letter by letter in reverse order, so
    /// `inverse(a + b) == inverse(b) + inverse(a)` holds exactly. The empty
    /// word inverts to the identity.
    pub fn inverse(&self, word: &Word<T>) -> Result<Word<T>, NielsenError> {
        match word.len() {
            0 => Ok(self.identity.clone()),
            1 => {
                let inverse = self.inverse_symbol(word.label()?)?;
                self.letter(inverse)
                    .cloned()
                    .ok_or_else(|| NielsenError::key_not_found(inverse))
            }
            _ => word
                .reversed_symbols()
                .map(|symbol| self.inverse_symbol(symbol).cloned())
                .collect(),
        }
    }

    /// Raises `word` to the integer power `exp`.
    ///
    /// Negative exponents invert first, zero gives the identity. Positive
    /// powers are the literal repetition of `word`, built by halving so the
    /// recursion depth is logarithmic in `exp`.
    pub fn power(&self, word: &Word<T>, exp: i64) -> Result<Word<T>, NielsenError> {
        if exp < 0 {
            let inverse = self.inverse(word)?;
            return Ok(self.power_unsigned(&inverse, exp.unsigned_abs()));
        }
        Ok(self.power_unsigned(word, exp.unsigned_abs()))
    }

    fn power_unsigned(&self, word: &Word<T>, exp: u64) -> Word<T> {
        match exp {
            0 => self.identity.clone(),
            1 => word.clone(),
            _ => {
                let half = self.power_unsigned(word, exp / 2);
                let doubled = &half + &half;
                if exp % 2 == 0 {
                    doubled
                } else {
                    &doubled + word
                }
            }
        }
    }
}
