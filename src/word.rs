use crate::error::NielsenError;
use crate::symbol::Symbol;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Rev;
use std::ops::{Add, Bound, RangeBounds};
use std::slice;

/// A finite sequence of symbols: an element of the free monoid.
///
/// Words carry no group semantics. They are not necessarily reduced and may
/// contain identity symbols or adjacent inverse pairs; see
/// [`freely_reduced`](crate::freely_reduced) for cancellation.
///
/// Words are values. Concatenation and slicing always build a new word.
///
/// Ordering is shortlex: shorter words come first, and words of equal length
/// compare lexicographically by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word<T> {
    symbols: Vec<Symbol<T>>,
}

impl<T> Word<T> {
    /// Creates the empty word.
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Creates a length-one word carrying `Symbol::Generator(label)`.
    pub fn generator(label: T) -> Self {
        Self {
            symbols: vec![Symbol::Generator(label)],
        }
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true for the empty word.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol<T>] {
        &self.symbols
    }

    /// Iterates symbols front to back.
    pub fn iter(&self) -> slice::Iter<'_, Symbol<T>> {
        self.symbols.iter()
    }

    /// Iterates symbols back to front without building a new word.
    pub fn reversed_symbols(&self) -> Rev<slice::Iter<'_, Symbol<T>>> {
        self.symbols.iter().rev()
    }

    /// Returns the single symbol of a length-one word.
    ///
    /// Fails with [`NielsenError::InvalidOperation`] for any other length.
    pub fn label(&self) -> Result<&Symbol<T>, NielsenError> {
        match self.symbols.as_slice() {
            [symbol] => Ok(symbol),
            _ => Err(NielsenError::InvalidOperation { len: self.len() }),
        }
    }

    pub(crate) fn into_symbols(self) -> Vec<Symbol<T>> {
        self.symbols
    }
}

impl<T: PartialEq> Word<T> {
    /// Returns true if `prefix` is a prefix of this word.
    pub fn starts_with(&self, prefix: &Word<T>) -> bool {
        self.symbols.starts_with(&prefix.symbols)
    }

    /// Returns true if `suffix` is a suffix of this word.
    pub fn ends_with(&self, suffix: &Word<T>) -> bool {
        self.symbols.ends_with(&suffix.symbols)
    }
}

impl<T: Clone> Word<T> {
    /// Appends `other` to this word. No cancellation takes place.
    pub fn concat(&self, other: &Word<T>) -> Word<T> {
        let mut symbols = Vec::with_capacity(self.len() + other.len());
        symbols.extend_from_slice(&self.symbols);
        symbols.extend_from_slice(&other.symbols);
        Word { symbols }
    }

    /// Returns the length-one sub-word at `index`.
    pub fn at(&self, index: usize) -> Option<Word<T>> {
        self.symbols.get(index).cloned().map(Word::from)
    }

    /// Returns the contiguous sub-word covered by `range`.
    ///
    /// Bounds past the end are clipped and an inverted range yields the empty
    /// word, so `w.slice(..k)` and `w.slice(k..)` are total.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Word<T> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return Word::empty();
        }
        Word {
            symbols: self.symbols[start..end].to_vec(),
        }
    }

    /// Splits an even-length word at its midpoint.
    pub fn halves(&self) -> Result<(Word<T>, Word<T>), NielsenError> {
        if self.len() % 2 != 0 {
            return Err(NielsenError::InvalidSlice { len: self.len() });
        }
        let mid = self.len() / 2;
        Ok((self.slice(..mid), self.slice(mid..)))
    }

    /// Iterates the word as length-one words.
    pub fn letters(&self) -> impl Iterator<Item = Word<T>> + '_ {
        self.symbols.iter().cloned().map(Word::from)
    }
}

impl<T> Default for Word<T> {
    fn default() -> Self {
        Word::empty()
    }
}

impl<T> From<Symbol<T>> for Word<T> {
    fn from(symbol: Symbol<T>) -> Self {
        Word {
            symbols: vec![symbol],
        }
    }
}

impl<T> FromIterator<Symbol<T>> for Word<T> {
    fn from_iter<I: IntoIterator<Item = Symbol<T>>>(iter: I) -> Self {
        Word {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Word<T> {
    type Item = &'a Symbol<T>;
    type IntoIter = slice::Iter<'a, Symbol<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Add<&Word<T>> for &Word<T> {
    type Output = Word<T>;

    fn add(self, rhs: &Word<T>) -> Word<T> {
        self.concat(rhs)
    }
}

impl<T> Add for Word<T> {
    type Output = Word<T>;

    fn add(mut self, rhs: Word<T>) -> Word<T> {
        self.symbols.extend(rhs.symbols);
        self
    }
}

impl<T: Ord> Ord for Word<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.symbols.cmp(&other.symbols))
    }
}

impl<T: Ord> PartialOrd for Word<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> fmt::Display for Word<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return write!(f, "1");
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
