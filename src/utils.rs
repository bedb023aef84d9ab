//! Utility functions for string processing.

use unicode_normalization::{is_nfd_quick, IsNormalized, UnicodeNormalization};

/// Canonically decompose a form (Unicode NFD).
///
/// Query and candidates go through the same decomposition so a precomposed
/// letter and its base + combining mark spelling compare equal, and a missing
/// diacritic costs exactly one edit:
/// - "café" (4 chars) → "cafe\u{301}" (5 chars)
/// - "tummalachērla" → "tummalache\u{304}rla"
///
/// Case, whitespace and compatibility forms are left alone; that policy belongs
/// to the caller.
pub fn nfd(value: &str) -> String {
    match is_nfd_quick(value.chars()) {
        IsNormalized::Yes => value.to_owned(),
        _ => value.nfd().collect(),
    }
}

/// Length in Unicode scalar values, the unit the edit distance counts in.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
