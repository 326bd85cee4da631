use thiserror::Error;

/// Errors raised by word, group and reduction operations.
///
/// All of these are contract violations by the caller: malformed generator
/// sets, unknown symbols or degenerate inputs. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NielsenError {
    /// A single-symbol query was made on a word whose length is not one.
    #[error("expected a word of length 1, found length {len}")]
    InvalidOperation { len: usize },

    /// A symbol outside the group's generator/inverse/identity universe.
    #[error("symbol {symbol} is not part of this free group")]
    KeyNotFound { symbol: String },

    /// Every input word reduced to the identity.
    #[error("nielsen reduction needs at least one non-identity word")]
    PreconditionViolation,

    /// Attempted to split an odd-length word into equal halves.
    #[error("cannot halve a word of odd length {len}")]
    InvalidSlice { len: usize },

    /// The generator set contains both a symbol and its synthesized inverse.
    #[error("generator {symbol} collides with the inverse of another generator")]
    InverseCollision { symbol: String },

    /// The configured rewrite limit was reached before a fixpoint.
    #[error("rewrite budget of {limit} exhausted before reaching a fixpoint")]
    BudgetExhausted { limit: usize },
}

impl NielsenError {
    pub(crate) fn key_not_found(symbol: &impl std::fmt::Debug) -> Self {
        NielsenError::KeyNotFound {
            symbol: format!("{symbol:?}"),
        }
    }
}
