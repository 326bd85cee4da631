use super::{abc_group, symbol_from_byte, word_strategy};
use crate::{
    freely_reduced, generates_same_subgroup, is_nielsen_reduced, nielsen_reduced, NielsenError,
    NielsenReducer, SubgroupGraph, Word,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn input_strategy() -> impl Strategy<Value = Vec<Word<char>>> {
    prop::collection::vec(word_strategy(1..7), 1..5)
}

/// Splits bytes into words, using every byte divisible by 8 as a separator.
fn words_from_bytes(input: &[u8]) -> Vec<Word<char>> {
    input
        .split(|b| b % 8 == 0)
        .map(|chunk| chunk.iter().copied().map(symbol_from_byte).collect())
        .collect()
}

proptest! {
    /// Property 1: Precondition
    /// Reduction fails exactly when every input word is trivial.
    #[test]
    fn prop_precondition(input in input_strategy()) {
        let group = abc_group();
        let all_trivial = input
            .iter()
            .all(|w| group.is_identity(&freely_reduced(&group, w).unwrap()));

        match nielsen_reduced(&group, input) {
            Err(NielsenError::PreconditionViolation) => prop_assert!(all_trivial),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
            Ok(v) => {
                prop_assert!(!all_trivial);
                prop_assert!(!v.is_empty());
            }
        }
    }

    /// Property 2: Output shape
    /// Every element is freely reduced, non-trivial and no larger than its inverse.
    #[test]
    fn prop_output_canonical(input in input_strategy()) {
        let group = abc_group();
        let Ok(v) = nielsen_reduced(&group, input.clone()) else {
            return Ok(());
        };

        for w in &v {
            prop_assert!(!group.is_identity(w));
            prop_assert_eq!(&freely_reduced(&group, w).unwrap(), w);
            prop_assert!(*w <= group.inverse(w).unwrap());
        }
        prop_assert!(v.len() <= input.len());
    }

    /// Property 3: Fixpoint
    /// Reducing a reduced set is a no-op.
    #[test]
    fn prop_fixpoint(input in input_strategy()) {
        let group = abc_group();
        let Ok(v) = nielsen_reduced(&group, input) else {
            return Ok(());
        };

        prop_assert!(is_nielsen_reduced(&group, &v).unwrap());

        let mut reducer = NielsenReducer::new(&group);
        let again = reducer.reduce(v.clone()).unwrap();
        prop_assert_eq!(again, v);
        prop_assert_eq!(reducer.stats().rewrites(), 0);
    }

    /// Property 4: Subgroup equivalence
    /// The reduced set generates exactly the input's subgroup, and freely.
    #[test]
    fn prop_same_subgroup(input in input_strategy()) {
        let group = abc_group();
        let Ok(v) = nielsen_reduced(&group, input.clone()) else {
            return Ok(());
        };

        prop_assert!(generates_same_subgroup(&group, &input, &v).unwrap());

        let graph = SubgroupGraph::new(&group, &v).unwrap();
        prop_assert_eq!(v.len(), graph.rank());
    }

    /// Property 5: Order independence
    /// The result does not depend on the order of the input words.
    #[test]
    fn prop_order_independent(input in input_strategy()) {
        let group = abc_group();
        let forward = nielsen_reduced(&group, input.clone());
        let backward = nielsen_reduced(&group, input.into_iter().rev());
        prop_assert_eq!(forward, backward);
    }
}

/// Bolero fuzz test: Reduction never panics on arbitrary word sets
#[cfg(test)]
#[test]
fn fuzz_nielsen_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let group = abc_group();
        let words = words_from_bytes(input);

        match nielsen_reduced(&group, words.clone()) {
            Ok(v) => {
                assert!(is_nielsen_reduced(&group, &v).unwrap());
                assert!(generates_same_subgroup(&group, &words, &v).unwrap());
                assert_eq!(v.len(), SubgroupGraph::new(&group, &v).unwrap().rank());
            }
            Err(err) => assert_eq!(err, NielsenError::PreconditionViolation),
        }
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_example_is_stable() {
        let group = abc_group();
        let [a, b, c] = ['a', 'b', 'c'].map(Word::generator);
        let a_inv = group.inverse(&a).unwrap();
        let b_inv = group.inverse(&b).unwrap();
        let u = vec![
            &(&a + &b) + &c,
            &(&(&a + &b_inv) + &c) + &b_inv,
            &(&c + &c) + &a_inv,
        ];

        let first = nielsen_reduced(&group, u.clone()).unwrap();
        let second = nielsen_reduced(&group, u.iter().rev().cloned()).unwrap();
        assert_eq!(first, second);
        assert!(generates_same_subgroup(&group, &u, &first).unwrap());

        let graph = SubgroupGraph::new(&group, &u).unwrap();
        assert_eq!(first.len(), graph.rank());
        assert!(first.len() <= u.len());
    }

    #[test]
    fn test_words_from_bytes() {
        let words = words_from_bytes(&[1, 2, 8, 3]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].len(), 2);
        assert_eq!(words[1].len(), 1);
        let empty: BTreeSet<Word<char>> = words_from_bytes(&[]).into_iter().collect();
        assert_eq!(empty.len(), 1);
    }
}
