//! Runtime contracts for the distance engine and the tier tracker.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Name the property they check in the panic message
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                         |
//! |--------------------------------|--------------------------------------------------|
//! | `check_within_cutoff`          | A finite result never exceeds its cutoff         |
//! | `check_length_lower_bound`     | `||a| - |b|| <= distance` outside prefix mode    |
//! | `check_tiers_ordered`          | best < second best whenever both are finite      |
//! | `check_tier_consistent`        | A tier has matches iff it has a finite distance  |
//!
//! # Usage
//!
//! ```ignore
//! use lexmatch::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_tiers_ordered(best.distance, second.map(|t| t.distance));
//!
//! // In release builds, this is a no-op
//! ```

use crate::fuzzy::Distance;

// ============================================================================
// ENGINE CONTRACTS
// ============================================================================

/// Check that a finite distance respects the cutoff it was computed under.
///
/// # Panics (debug builds only)
/// Panics if `distance` is `Finite(d)` with `d > max_distance`.
#[inline]
pub fn check_within_cutoff(distance: Distance, max_distance: u32) {
    if let Distance::Finite(d) = distance {
        debug_assert!(
            d <= max_distance,
            "Contract violation: WithinCutoff - distance {} > cutoff {}",
            d,
            max_distance
        );
    }
}

/// Check the length-difference lower bound of a symmetric distance.
///
/// Every edit changes the length by at most one, so a finite distance is at
/// least the difference in lengths. Does not apply in prefix mode, where the
/// unmatched tail is free.
///
/// # Panics (debug builds only)
/// Panics if `distance` is finite and smaller than `|a_len - b_len|`.
#[inline]
pub fn check_length_lower_bound(distance: Distance, a_len: usize, b_len: usize) {
    if let Distance::Finite(d) = distance {
        let diff = a_len.abs_diff(b_len);
        debug_assert!(
            d as usize >= diff,
            "Contract violation: LengthLowerBound - distance {} < length difference {}",
            d,
            diff
        );
    }
}

// ============================================================================
// TIER CONTRACTS
// ============================================================================

/// Check that the best tier is strictly closer than the second-best tier.
///
/// # Panics (debug builds only)
/// Panics if both distances are finite and `best >= second`.
#[inline]
pub fn check_tiers_ordered(best: Distance, second: Option<Distance>) {
    if let (Distance::Finite(b), Some(Distance::Finite(s))) = (best, second) {
        debug_assert!(
            b < s,
            "Contract violation: TiersOrdered - best distance {} >= second best {}",
            b,
            s
        );
    }
}

/// Check that a tier has matches exactly when its distance is finite.
///
/// # Panics (debug builds only)
/// Panics on an empty tier with a finite distance, or a populated tier without one.
#[inline]
pub fn check_tier_consistent(distance: Distance, match_count: usize) {
    debug_assert_eq!(
        distance.is_finite(),
        match_count > 0,
        "Contract violation: TierConsistent - distance {} with {} matches",
        distance,
        match_count
    );
}
