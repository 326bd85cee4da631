//! Nielsen reduction of finite subsets of a free group.
//!
//! Given words `U`, [`nielsen_reduced`] returns a set `V` with `<V> = <U>`
//! such that:
//! 1. **No pairwise shortening**: for distinct `u, v` in `V` and signs
//!    `e, f`, the reduced product `u^e v^f` is never shorter than `u`
//! 2. **No half overlap**: no even-length `p q^-1` in `V` with `p < q` lets
//!    another element starting with `q` (or ending with `q^-1`) trade that
//!    half for `p`
//!
//! The working set is a `BTreeSet` in shortlex order. Every scan walks it in
//! that order and every word is stored as the smaller of itself and its
//! inverse, so results are reproducible.

use crate::error::NielsenError;
use crate::group::FreeGroup;
use crate::reduce::freely_reduced;
use crate::symbol::Label;
use crate::word::Word;
use std::cmp;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Exponent pairs tried for every ordered pair of words.
const SIGNS: [(i64, i64); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Tunables for a [`NielsenReducer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NielsenConfig {
    /// Upper bound on rewrites across both phases. `None` runs to the fixpoint.
    pub max_rewrites: Option<usize>,
}

impl NielsenConfig {
    /// Returns a configuration that fails once `limit` rewrites were applied
    /// and another one is still pending.
    pub fn with_max_rewrites(mut self, limit: usize) -> Self {
        self.max_rewrites = Some(limit);
        self
    }
}

/// Counters collected during one reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Number of words handed to the reducer
    pub input_words: usize,
    /// Distinct non-identity words left after normalisation
    pub normalized_words: usize,
    /// Words removed or shortened by pairwise products
    pub pairwise_rewrites: usize,
    /// Words replaced through a half overlap
    pub half_overlap_rewrites: usize,
    /// Outer passes (pairwise phase followed by a half-overlap search)
    pub passes: usize,
}

impl ReductionStats {
    /// Returns the total number of rewrites applied.
    pub fn rewrites(&self) -> usize {
        self.pairwise_rewrites + self.half_overlap_rewrites
    }
}

/// A single change to the working set: drop `removed`, add `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rewrite<T> {
    removed: Word<T>,
    replacement: Option<Word<T>>,
}

/// Computes Nielsen-reduced generating sets over one free group.
///
/// The reducer only borrows the group; each call to [`reduce`](Self::reduce)
/// is independent and resets the statistics.
pub struct NielsenReducer<'g, T> {
    group: &'g FreeGroup<T>,
    config: NielsenConfig,
    stats: ReductionStats,
}

impl<'g, T: Label> NielsenReducer<'g, T> {
    /// Creates a reducer with the default (unbounded) configuration.
    pub fn new(group: &'g FreeGroup<T>) -> Self {
        Self::with_config(group, NielsenConfig::default())
    }

    /// Creates a reducer with an explicit configuration.
    pub fn with_config(group: &'g FreeGroup<T>, config: NielsenConfig) -> Self {
        Self {
            group,
            config,
            stats: ReductionStats::default(),
        }
    }

    /// Returns the statistics of the most recent reduction.
    pub fn stats(&self) -> ReductionStats {
        self.stats
    }

    /// Returns a Nielsen-reduced set generating the same subgroup as `words`.
    ///
    /// Fails with [`NielsenError::PreconditionViolation`] when every word
    /// reduces to the identity, and with [`NielsenError::BudgetExhausted`]
    /// when the configured rewrite limit is reached first.
    pub fn reduce<I>(&mut self, words: I) -> Result<BTreeSet<Word<T>>, NielsenError>
    where
        I: IntoIterator<Item = Word<T>>,
    {
        self.stats = ReductionStats::default();
        let group = self.group;

        let mut set = BTreeSet::new();
        for word in words {
            self.stats.input_words += 1;
            let reduced = freely_reduced(group, &word)?;
            if group.is_identity(&reduced) {
                continue;
            }
            set.insert(canonical(group, reduced)?);
        }
        if set.is_empty() {
            return Err(NielsenError::PreconditionViolation);
        }
        self.stats.normalized_words = set.len();

        loop {
            self.stats.passes += 1;
            trace!(pass = self.stats.passes, size = set.len(), "nielsen pass");

            while let Some(rewrite) = find_pairwise_rewrite(group, &set)? {
                self.spend_rewrite()?;
                self.stats.pairwise_rewrites += 1;
                debug!(removed = ?rewrite.removed, replacement = ?rewrite.replacement, "pairwise rewrite");
                apply(&mut set, rewrite);
            }

            let Some(rewrite) = find_half_overlap_rewrite(group, &set)? else {
                break;
            };
            self.spend_rewrite()?;
            self.stats.half_overlap_rewrites += 1;
            debug!(removed = ?rewrite.removed, replacement = ?rewrite.replacement, "half-overlap rewrite");
            apply(&mut set, rewrite);
        }

        debug!(
            size = set.len(),
            rewrites = self.stats.rewrites(),
            passes = self.stats.passes,
            "nielsen reduction reached a fixpoint"
        );
        Ok(set)
    }

    fn spend_rewrite(&self) -> Result<(), NielsenError> {
        match self.config.max_rewrites {
            Some(limit) if self.stats.rewrites() >= limit => {
                Err(NielsenError::BudgetExhausted { limit })
            }
            _ => Ok(()),
        }
    }
}

/// Returns a Nielsen-reduced set generating the same subgroup as `words`.
///
/// Shorthand for [`NielsenReducer::reduce`] with the default configuration.
pub fn nielsen_reduced<T, I>(
    group: &FreeGroup<T>,
    words: I,
) -> Result<BTreeSet<Word<T>>, NielsenError>
where
    T: Label,
    I: IntoIterator<Item = Word<T>>,
{
    NielsenReducer::new(group).reduce(words)
}

/// Returns true if neither a pairwise nor a half-overlap rewrite applies.
///
/// `words` is taken as-is: callers pass freely reduced, canonical words such
/// as the output of [`nielsen_reduced`].
pub fn is_nielsen_reduced<T: Label>(
    group: &FreeGroup<T>,
    words: &BTreeSet<Word<T>>,
) -> Result<bool, NielsenError> {
    Ok(find_pairwise_rewrite(group, words)?.is_none()
        && find_half_overlap_rewrite(group, words)?.is_none())
}

/// The shortlex-smaller of `word` and its inverse.
fn canonical<T: Label>(group: &FreeGroup<T>, word: Word<T>) -> Result<Word<T>, NielsenError> {
    let inverse = group.inverse(&word)?;
    Ok(cmp::min(word, inverse))
}

fn apply<T: Label>(set: &mut BTreeSet<Word<T>>, rewrite: Rewrite<T>) {
    set.remove(&rewrite.removed);
    if let Some(replacement) = rewrite.replacement {
        set.insert(replacement);
    }
}

/// Finds the first `u_i` that some product `u_i^e u_j^f` freely reduces
/// below the length of `u_i`.
fn find_pairwise_rewrite<T: Label>(
    group: &FreeGroup<T>,
    set: &BTreeSet<Word<T>>,
) -> Result<Option<Rewrite<T>>, NielsenError> {
    for u_i in set {
        for u_j in set {
            if u_i == u_j {
                continue;
            }
            for (e_i, e_j) in SIGNS {
                let product = group.power(u_i, e_i)? + group.power(u_j, e_j)?;
                let v = freely_reduced(group, &product)?;
                if v.len() < u_i.len() {
                    let replacement = if group.is_identity(&v) {
                        None
                    } else {
                        Some(canonical(group, v)?)
                    };
                    return Ok(Some(Rewrite {
                        removed: u_i.clone(),
                        replacement,
                    }));
                }
            }
        }
    }
    Ok(None)
}

/// Finds the shortest even-length `u_j` whose larger half can be traded for
/// its smaller half at the start of another element.
///
/// `u_j` is read as `p q^-1` in whichever orientation has `p < q`. Any other
/// `u_k` that starts with `q` (or ends with `q^-1`) has that overlap replaced
/// by `p`. The result is a reduced product of `u_j` and `u_k`, each to the
/// power `1` or `-1`.
///
/// Only the substituted half is compared, never the remainder of `u_k`.
/// Ordering words by length and then by the sorted pair of the first halves
/// of `w` and `w^-1`, the rewritten element strictly drops, so the outer loop
/// terminates.
fn find_half_overlap_rewrite<T: Label>(
    group: &FreeGroup<T>,
    set: &BTreeSet<Word<T>>,
) -> Result<Option<Rewrite<T>>, NielsenError> {
    for u_j in set.iter().filter(|w| w.len() % 2 == 0) {
        let (left, right) = u_j.halves()?;
        let right_inv = group.inverse(&right)?;
        let (p, q) = match left.cmp(&right_inv) {
            cmp::Ordering::Less => (left, right_inv),
            cmp::Ordering::Greater => (right_inv, left),
            cmp::Ordering::Equal => continue,
        };

        for u_k in set {
            if u_k == u_j {
                continue;
            }
            // u_k = q c^-1 becomes p c^-1; u_k = c q^-1 becomes c p^-1.
            for w in [u_k.clone(), group.inverse(u_k)?] {
                if !w.starts_with(&q) || 2 * q.len() > w.len() {
                    continue;
                }
                let product = &p + &w.slice(q.len()..);
                let reduced = freely_reduced(group, &product)?;
                let replacement = if group.is_identity(&reduced) {
                    None
                } else {
                    Some(canonical(group, reduced)?)
                };
                return Ok(Some(Rewrite {
                    removed: u_k.clone(),
                    replacement,
                }));
            }
        }
    }
    Ok(None)
}
