use slotmap::DefaultKey;
use std::fmt;
use std::hash::Hash;

/// Bounds required of generator labels.
///
/// Blanket-implemented, so `char`, `&str`, `String`, integers and the like
/// all work out of the box.
pub trait Label: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Label for T {}

/// One letter of a free group word.
///
/// `Generator` carries a caller-supplied label. `Inverse` is the formal
/// inverse a [`FreeGroup`](crate::FreeGroup) synthesizes for a generator, so
/// it can never coincide with a generator the caller wrote down.
///
/// The derived ordering puts every `Generator` before every `Inverse`, then
/// compares labels. Tie-breaks between a word and its inverse rely on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol<T> {
    /// A generator label as given by the caller.
    Generator(T),

    /// The synthesized inverse of a generator label.
    Inverse(T),
}

impl<T> Symbol<T> {
    /// Returns the underlying label, regardless of orientation.
    pub fn label(&self) -> &T {
        match self {
            Symbol::Generator(label) | Symbol::Inverse(label) => label,
        }
    }

    /// Returns true for a synthesized inverse.
    pub fn is_inverse(&self) -> bool {
        matches!(self, Symbol::Inverse(_))
    }

    /// Swaps orientation. Only the group decides what the inverse of a symbol
    /// really is (the identity maps to itself); this is the raw candidate.
    pub(crate) fn flipped(self) -> Self {
        match self {
            Symbol::Generator(label) => Symbol::Inverse(label),
            Symbol::Inverse(label) => Symbol::Generator(label),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Generator(label) => write!(f, "{label}"),
            Symbol::Inverse(label) => write!(f, "{label}^-1"),
        }
    }
}

/// A node in the doubly-linked symbol chain used during free reduction.
///
/// Cancelling a pair unlinks two nodes and joins their neighbours, so the
/// chain never shifts the remaining symbols.
#[derive(Debug)]
pub(crate) struct SymbolNode<T> {
    pub symbol: Symbol<T>,
    pub prev: Option<DefaultKey>,
    pub next: Option<DefaultKey>,
}

impl<T> SymbolNode<T> {
    pub(crate) fn new(symbol: Symbol<T>) -> Self {
        Self {
            symbol,
            prev: None,
            next: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involutive() {
        let a = Symbol::Generator('a');
        assert_eq!(a.clone().flipped(), Symbol::Inverse('a'));
        assert_eq!(a.clone().flipped().flipped(), a);
    }

    #[test]
    fn test_generators_order_before_inverses() {
        assert!(Symbol::Generator('z') < Symbol::Inverse('a'));
        assert!(Symbol::Generator('a') < Symbol::Generator('b'));
        assert!(Symbol::Inverse('a') < Symbol::Inverse('b'));
    }

    #[test]
    fn test_label_ignores_orientation() {
        assert_eq!(Symbol::Generator(7).label(), &7);
        assert_eq!(Symbol::Inverse(7).label(), &7);
        assert!(Symbol::Inverse(7).is_inverse());
        assert!(!Symbol::Generator(7).is_inverse());
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Generator("x").to_string(), "x");
        assert_eq!(Symbol::Inverse("x").to_string(), "x^-1");
    }

    #[test]
    fn test_symbol_node_creation() {
        let node = SymbolNode::new(Symbol::Generator('x'));
        assert!(matches!(node.symbol, Symbol::Generator('x')));
        assert_eq!(node.prev, None);
        assert_eq!(node.next, None);
    }
}
