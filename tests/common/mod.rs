//! Shared test utilities, fixtures and reference oracles.

#![allow(dead_code)]

use lexmatch::{find_closest_forms, MatchOptions, MatchResult};

// ============================================================================
// FIXTURES
// ============================================================================

/// One edit away from "1234567890": insertion, deletion, substitution and
/// transposition, each at the start, middle and end.
pub const ONE_EDIT_FROM_DIGITS: [&str; 12] = [
    "a1234567890",
    "1a234567890",
    "1234567890a",
    "234567890",
    "123457890",
    "123456789",
    "a234567890",
    "1234a67890",
    "123456789a",
    "2134567890",
    "1234657890",
    "1234567809",
];

/// Two or more edits away from "1234567890".
pub const NOISE_AROUND_DIGITS: [&str; 11] = [
    "aa1234567890",
    "1a23456789a0",
    "1a2a34567890",
    "1a23a4567890",
    "1a234a567890",
    "1a2345a67890",
    "ab34567890",
    "1234ab7890",
    "12345678ab",
    "2134567809",
    "1235467980",
];

pub const DISTANCE_FORMS: [&str; 5] = ["distance", "distances", "distane", "destance", "distence"];

// ============================================================================
// HELPERS
// ============================================================================

/// Run the matcher over plain string forms.
pub fn find_in<'a>(
    forms: &[&'a str],
    query: &str,
    options: MatchOptions,
    max_distance: u32,
) -> MatchResult<&'a str> {
    find_closest_forms(forms.iter().copied(), |f| Some(*f), query, options, max_distance)
}

/// Assert two collections hold the same items, ignoring order.
pub fn assert_same_items(actual: &[&str], expected: &[&str]) {
    let mut actual = actual.to_vec();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

// ============================================================================
// ORACLES
// ============================================================================

/// Optimal string alignment distance, straight from `strsim`.
pub fn oracle_osa(a: &str, b: &str) -> u32 {
    strsim::osa_distance(a, b) as u32
}

/// Cost of turning all of `a` into the closest prefix of `b`.
pub fn oracle_prefix_osa(a: &str, b: &str) -> u32 {
    let prefixes = b.char_indices().map(|(i, _)| &b[..i]).chain(std::iter::once(b));
    prefixes.map(|prefix| oracle_osa(a, prefix)).min().unwrap_or(0)
}
