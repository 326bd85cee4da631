//! Free reduction and identity stripping.
//!
//! Every word of a free group has a unique freely reduced form: the word left
//! once no adjacent pair `x x^-1` remains. Cancellation is confluent, so the
//! order in which pairs are removed does not matter.

use crate::error::NielsenError;
use crate::group::FreeGroup;
use crate::symbol::{Label, SymbolNode};
use crate::word::Word;
use slotmap::{DefaultKey, SlotMap};

/// A doubly-linked chain of symbols supporting O(1) pair removal.
struct SymbolChain<T> {
    symbols: SlotMap<DefaultKey, SymbolNode<T>>,
    head: Option<DefaultKey>,
}

impl<T> SymbolChain<T> {
    fn from_word(word: Word<T>) -> Self {
        let mut symbols = SlotMap::with_capacity(word.len());
        let mut head = None;
        let mut prev: Option<DefaultKey> = None;

        for symbol in word.into_symbols() {
            let key = symbols.insert(SymbolNode::new(symbol));
            symbols[key].prev = prev;
            match prev {
                Some(p) => symbols[p].next = Some(key),
                None => head = Some(key),
            }
            prev = Some(key);
        }

        Self { symbols, head }
    }

    /// Unlinks `first` and its successor `second`, joining their neighbours.
    ///
    /// Returns the node the scan should resume from: the predecessor when
    /// there is one, since the new adjacency may itself cancel.
    fn cancel_pair(&mut self, first: DefaultKey, second: DefaultKey) -> Option<DefaultKey> {
        let before = self.symbols[first].prev;
        let after = self.symbols[second].next;

        self.symbols.remove(first);
        self.symbols.remove(second);

        match before {
            Some(b) => self.symbols[b].next = after,
            None => self.head = after,
        }
        if let Some(a) = after {
            self.symbols[a].prev = before;
        }

        before.or(after)
    }

    fn into_word(mut self) -> Word<T> {
        let mut out = Vec::with_capacity(self.symbols.len());
        let mut current = self.head;
        while let Some(key) = current {
            let Some(node) = self.symbols.remove(key) else {
                break;
            };
            current = node.next;
            out.push(node.symbol);
        }
        out.into_iter().collect()
    }
}

/// Returns the freely reduced word equivalent to `word` in `group`.
///
/// Identity symbols are stripped first (see [`strip_identities`]), then
/// adjacent inverse pairs are cancelled until none remain. An empty result
/// becomes the identity.
///
/// Fails with [`NielsenError::KeyNotFound`] if a symbol whose inverse is
/// needed does not belong to `group`.
pub fn freely_reduced<T: Label>(
    group: &FreeGroup<T>,
    word: &Word<T>,
) -> Result<Word<T>, NielsenError> {
    let mut chain = SymbolChain::from_word(strip_identities(group, word));
    let mut cursor = chain.head;

    while let Some(current) = cursor {
        let Some(next) = chain.symbols[current].next else {
            break;
        };

        let inverse = group.inverse_symbol(&chain.symbols[current].symbol)?;
        if *inverse == chain.symbols[next].symbol {
            cursor = chain.cancel_pair(current, next);
        } else {
            cursor = Some(next);
        }
    }

    let reduced = chain.into_word();
    if reduced.is_empty() {
        return Ok(group.identity().clone());
    }
    Ok(reduced)
}

/// Removes every identity symbol from `word`, keeping the rest in order.
///
/// A word made only of identities strips to the identity itself, never to the
/// empty word.
pub fn strip_identities<T: Label>(group: &FreeGroup<T>, word: &Word<T>) -> Word<T> {
    let identity = group.identity();
    let stripped: Word<T> = word
        .iter()
        .filter(|symbol| !identity.symbols().contains(*symbol))
        .cloned()
        .collect();

    if stripped.is_empty() {
        identity.clone()
    } else {
        stripped
    }
}

/// Reference cancellation: rescan from the start after every removal.
///
/// Quadratic, kept for cross-checking the chain-based reduction in tests.
#[cfg(test)]
pub(crate) fn freely_reduced_by_rescan<T: Label>(
    group: &FreeGroup<T>,
    word: &Word<T>,
) -> Result<Word<T>, NielsenError> {
    let mut symbols = strip_identities(group, word).into_symbols();
    let mut modified = true;
    while modified {
        modified = false;
        for i in 0..symbols.len().saturating_sub(1) {
            if *group.inverse_symbol(&symbols[i])? == symbols[i + 1] {
                symbols.drain(i..i + 2);
                modified = true;
                break;
            }
        }
    }
    if symbols.is_empty() {
        return Ok(group.identity().clone());
    }
    Ok(symbols.into_iter().collect())
}
