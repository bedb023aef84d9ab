//! Differential testing: the banded engine against an unbanded OSA oracle.
//!
//! If they disagree, the oracle is right.

use super::common::{oracle_osa, oracle_prefix_osa};
use super::{nonempty_word_strategy, word_strategy};
use lexmatch::{edit_distance, edit_distance_slices, Distance, UNBOUNDED};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Unbounded distance equals the oracle exactly.
    #[test]
    fn diff_unbounded(a in word_strategy(10), b in word_strategy(10)) {
        prop_assert_eq!(
            edit_distance(&a, &b, UNBOUNDED, false),
            Distance::Finite(oracle_osa(&a, &b)),
            "a={:?} b={:?}", a, b
        );
    }

    /// Under any cutoff the engine returns the oracle value or TooFar, and
    /// TooFar exactly when the oracle value exceeds the cutoff.
    #[test]
    fn diff_bounded(a in word_strategy(10), b in word_strategy(10), max in 0u32..6) {
        let oracle = oracle_osa(&a, &b);
        let expected = if oracle <= max { Distance::Finite(oracle) } else { Distance::TooFar };
        prop_assert_eq!(edit_distance(&a, &b, max, false), expected, "a={:?} b={:?} max={}", a, b, max);
    }

    /// Prefix mode is the cheapest alignment of all of `a` with a prefix of `b`.
    #[test]
    fn diff_prefix(
        a in nonempty_word_strategy(8),
        b in nonempty_word_strategy(12),
        max in prop_oneof![0u32..6, Just(UNBOUNDED)],
    ) {
        let oracle = oracle_prefix_osa(&a, &b);
        let expected = if oracle <= max { Distance::Finite(oracle) } else { Distance::TooFar };
        prop_assert_eq!(edit_distance(&a, &b, max, true), expected, "a={:?} b={:?} max={}", a, b, max);
    }

    /// The slice entry point agrees with the string one.
    #[test]
    fn diff_slices(a in word_strategy(8), b in word_strategy(8), prefix in any::<bool>()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        prop_assert_eq!(
            edit_distance_slices(&ac[..], &bc[..], 3, prefix),
            edit_distance(&a, &b, 3, prefix)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_identity(s in nonempty_word_strategy(12), max in 0u32..4) {
        prop_assert_eq!(edit_distance(&s, &s, max, false), Distance::Finite(0));
    }

    #[test]
    fn prop_symmetry(a in word_strategy(10), b in word_strategy(10), max in prop_oneof![0u32..6, Just(UNBOUNDED)]) {
        prop_assert_eq!(edit_distance(&a, &b, max, false), edit_distance(&b, &a, max, false));
    }

    /// Lowering the cutoff by one either keeps the value or turns it into TooFar.
    #[test]
    fn prop_cutoff_monotonicity(a in word_strategy(10), b in word_strategy(10), k in 1u32..8) {
        if let Distance::Finite(d) = edit_distance(&a, &b, k, false) {
            let tighter = edit_distance(&a, &b, k - 1, false);
            if d <= k - 1 {
                prop_assert_eq!(tighter, Distance::Finite(d));
            } else {
                prop_assert_eq!(tighter, Distance::TooFar);
            }
        }
    }

    /// Any finite distance is at least the length difference.
    #[test]
    fn prop_length_lower_bound(a in word_strategy(10), b in word_strategy(10)) {
        if let Distance::Finite(d) = edit_distance(&a, &b, UNBOUNDED, false) {
            let diff = a.chars().count().abs_diff(b.chars().count()) as u32;
            prop_assert!(d >= diff);
        }
    }

    /// Prefix mode never costs more than plain mode.
    #[test]
    fn prop_prefix_never_worse(a in word_strategy(8), b in word_strategy(12)) {
        prop_assert!(edit_distance(&a, &b, UNBOUNDED, true) <= edit_distance(&a, &b, UNBOUNDED, false));
    }
}
