//! Engine behaviour through the public API.

use lexmatch::{
    edit_distance, edit_distance_slices, edit_distance_with_stats, Distance, LARGER_THAN_MAX,
    UNBOUNDED,
};

#[test]
fn test_identity_under_any_cutoff() {
    for s in ["a", "abo", "distance", "tummalache\u{304}rla"] {
        for max in [0, 1, 5, UNBOUNDED] {
            assert_eq!(edit_distance(s, s, max, false), Distance::Finite(0), "{s} @ {max}");
        }
    }
}

#[test]
fn test_single_substitution_anywhere() {
    let base = "lexicon";
    for i in 0..base.chars().count() {
        let mut changed: Vec<char> = base.chars().collect();
        changed[i] = 'z';
        let changed: String = changed.into_iter().collect();
        assert_eq!(edit_distance(base, &changed, UNBOUNDED, false), Distance::Finite(1));
    }
}

#[test]
fn test_adjacent_transposition_is_one_edit() {
    assert_eq!(edit_distance("ab", "ba", UNBOUNDED, false), Distance::Finite(1));
    assert_eq!(edit_distance("ab", "ba", 0, false), LARGER_THAN_MAX);
}

#[test]
fn test_prefix_tolerance() {
    assert_eq!(edit_distance("cat", "catalog", UNBOUNDED, true), Distance::Finite(0));
    assert_eq!(edit_distance("cta", "catalog", UNBOUNDED, true), Distance::Finite(1));
    // the query itself is never truncated
    assert_eq!(edit_distance("catalog", "cat", UNBOUNDED, true), Distance::Finite(4));
}

#[test]
fn test_cutoff_tightening() {
    // "kitten" -> "sitting" is 3
    let exact = edit_distance("kitten", "sitting", UNBOUNDED, false);
    assert_eq!(exact, Distance::Finite(3));
    for max in 3..6 {
        assert_eq!(edit_distance("kitten", "sitting", max, false), exact);
    }
    for max in 0..3 {
        assert_eq!(edit_distance("kitten", "sitting", max, false), LARGER_THAN_MAX);
    }
}

#[test]
fn test_long_distant_candidate_is_pruned_early() {
    let query = "headword";
    let candidate = "z".repeat(10_000);

    let (distance, stats) = edit_distance_with_stats(query, &candidate, 2, false);
    assert_eq!(distance, LARGER_THAN_MAX);
    // Full matrix would be 8 * 10_000 cells
    assert!(stats.cells_evaluated < 100, "evaluated {} cells", stats.cells_evaluated);

    let (distance, stats) = edit_distance_with_stats(query, &candidate, 2, true);
    assert_eq!(distance, LARGER_THAN_MAX);
    assert!(stats.rows_evaluated <= 4, "evaluated {} rows", stats.rows_evaluated);
}

#[test]
fn test_unbounded_does_the_full_work() {
    let (distance, stats) = edit_distance_with_stats("abcd", "wxyz", UNBOUNDED, false);
    assert_eq!(distance, Distance::Finite(4));
    // Row 0 plus one row per character, five cells each
    assert_eq!(stats.rows_evaluated, 5);
    assert_eq!(stats.cells_evaluated, 25);
}

#[test]
fn test_word_sequences() {
    let typed = ["the", "quick", "brown", "fox"];
    let stored = ["the", "brown", "quick", "fox"];
    assert_eq!(edit_distance_slices(&typed, &stored, UNBOUNDED, false), Distance::Finite(1));
    assert_eq!(edit_distance_slices(&typed[..2], &stored, UNBOUNDED, true), Distance::Finite(1));
}

#[test]
fn test_combining_marks_count_as_characters() {
    // Decomposed e + macron is two scalars; dropping the mark is one edit
    assert_eq!(edit_distance("che\u{304}rla", "cherla", UNBOUNDED, false), Distance::Finite(1));
}
