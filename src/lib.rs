//! # Nielsen - Reduced Generating Sets in Free Groups
//!
//! A Rust implementation of Nielsen reduction for finitely generated
//! subgroups of a free group.
//!
//! Given finitely many words `U`, the reduction produces a set `V` that
//! generates the same subgroup while enforcing two constraints:
//! 1. **No pairwise shortening**: multiplying an element (or its inverse) by
//!    another element (or its inverse) never yields something shorter
//! 2. **No half overlap**: no even-length element lets another trade its
//!    larger half for the smaller one
//!
//! ## Example
//!
//! ```
//! use nielsen_rs::{nielsen_reduced, FreeGroup, Word};
//!
//! let [a, b, e] = ['a', 'b', 'e'].map(Word::generator);
//! let group = FreeGroup::new([a.clone(), b.clone()], e)?;
//!
//! let ab = &a + &b;
//! let reduced = nielsen_reduced(&group, [a.clone(), ab])?;
//!
//! assert!(reduced.contains(&a));
//! assert!(reduced.contains(&b));
//! # Ok::<(), nielsen_rs::NielsenError>(())
//! ```
//!
//! ## Layers
//!
//! - [`Word`]: an immutable sequence of [`Symbol`]s with no group semantics
//! - [`FreeGroup`]: identity, inverses and powers over words
//! - [`freely_reduced`] / [`strip_identities`]: cancellation of `x x^-1`
//! - [`nielsen_reduced`] / [`NielsenReducer`]: the fixpoint algorithm
//! - [`SubgroupGraph`]: membership tests for comparing generating sets

mod error;
mod group;
mod nielsen;
mod reduce;
mod subgroup;
mod symbol;
mod word;

#[cfg(test)]
mod tests;

pub use error::NielsenError;
pub use group::FreeGroup;
pub use nielsen::{
    is_nielsen_reduced, nielsen_reduced, NielsenConfig, NielsenReducer, ReductionStats,
};
pub use reduce::{freely_reduced, strip_identities};
pub use subgroup::{generates_same_subgroup, SubgroupGraph};
pub use symbol::{Label, Symbol};
pub use word::Word;
