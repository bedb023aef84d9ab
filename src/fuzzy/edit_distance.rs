// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with a cutoff and a banded early exit.
//!
//! The distance is unit-cost optimal string alignment: insertions, deletions,
//! substitutions and transpositions of adjacent characters each cost 1, and a
//! transposed pair is never edited again. That is the restricted form of
//! Damerau-Levenshtein, so `"ca" -> "abc"` costs 3 here, not 2.
//!
//! The key insight is Ukkonen's cutoff: a cell whose value exceeds the cutoff
//! can never feed a cell that stays within it, and a cell's value is never
//! smaller than its upper-left diagonal neighbour. So each row only needs the
//! columns between the first and last cell of the previous row that stayed
//! within the cutoff, plus one. Once that band is empty, or cannot reach the
//! last column on the final row, the answer is `TooFar` and we stop. Work is
//! roughly `O(max_distance * min(|a|, |b|))` instead of `O(|a| * |b|)`.
//!
//! Only three rows live at a time (the transposition looks two rows back),
//! each as long as the shorter input.

use super::distance::Distance;
use crate::contracts::{check_length_lower_bound, check_within_cutoff};

/// Pass as `max_distance` to compute the exact distance with no cutoff.
pub const UNBOUNDED: u32 = u32::MAX;

// Cells outside the band hold this. It is above every cutoff the engine
// accepts, which is why `UNBOUNDED` is clamped one below it.
const OUT_OF_BAND: u32 = u32::MAX;

const DELETION_COST: u32 = 1;
const INSERTION_COST: u32 = DELETION_COST;
const SUBSTITUTION_COST: u32 = 1;
const TRANSPOSITION_COST: u32 = 1;

/// Work done by one distance computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditStats {
    /// Rows of the virtual matrix that were started.
    pub rows_evaluated: usize,
    /// Cells of the virtual matrix that were computed.
    pub cells_evaluated: usize,
}

/// Inclusive column range of a row whose cells stayed within the cutoff.
#[derive(Debug, Clone, Copy)]
struct Band {
    first: usize,
    last: usize,
}

/// Edit distance between `a` and `b`, or `TooFar` if it exceeds `max_distance`.
///
/// With `prefix_tolerant`, the result is the cost of turning all of `a` into
/// *some prefix* of `b`, so an unmatched tail of `b` is free:
///
/// ```
/// use lexmatch::{edit_distance, Distance, UNBOUNDED};
///
/// assert_eq!(edit_distance("cat", "catalog", UNBOUNDED, true), Distance::Finite(0));
/// assert_eq!(edit_distance("cat", "catalog", UNBOUNDED, false), Distance::Finite(4));
/// assert_eq!(edit_distance("cat", "catalog", 2, false), Distance::TooFar);
/// ```
///
/// Characters are compared as Unicode scalar values; normalize both sides
/// first if canonically equivalent forms should compare equal.
pub fn edit_distance(a: &str, b: &str, max_distance: u32, prefix_tolerant: bool) -> Distance {
    edit_distance_with_stats(a, b, max_distance, prefix_tolerant).0
}

/// Like [`edit_distance`], also reporting how much of the matrix was touched.
pub fn edit_distance_with_stats(
    a: &str,
    b: &str,
    max_distance: u32,
    prefix_tolerant: bool,
) -> (Distance, EditStats) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut stats = EditStats::default();
    let distance = bounded_osa(&a, &b, max_distance, prefix_tolerant, &mut stats);
    (distance, stats)
}

/// [`edit_distance`] over arbitrary element sequences.
pub fn edit_distance_slices<E: PartialEq>(
    a: &[E],
    b: &[E],
    max_distance: u32,
    prefix_tolerant: bool,
) -> Distance {
    bounded_osa(a, b, max_distance, prefix_tolerant, &mut EditStats::default())
}

fn bounded_osa<E: PartialEq>(
    a: &[E],
    b: &[E],
    max_distance: u32,
    prefix_tolerant: bool,
    stats: &mut EditStats,
) -> Distance {
    let distance = banded(a, b, max_distance, prefix_tolerant, stats);
    check_within_cutoff(distance, max_distance);
    if !prefix_tolerant {
        check_length_lower_bound(distance, a.len(), b.len());
    }
    distance
}

fn banded<E: PartialEq>(
    a: &[E],
    b: &[E],
    max_distance: u32,
    prefix_tolerant: bool,
    stats: &mut EditStats,
) -> Distance {
    let max = max_distance.min(OUT_OF_BAND - 1);

    // Rows walk `outer`; the stored row spans `inner`, so we want `inner` short.
    // The free suffix only applies to `b`, so prefix mode must not swap.
    let (outer, inner) = if !prefix_tolerant && a.len() < b.len() {
        (b, a)
    } else {
        (a, b)
    };
    let (n1, n2) = (outer.len(), inner.len());

    if n1 == 0 || n2 == 0 {
        if prefix_tolerant {
            return Distance::Finite(0);
        }
        let raw = cost(n1, DELETION_COST).saturating_add(cost(n2, INSERTION_COST));
        return Distance::bounded(raw, max);
    }

    let mut rows = [
        vec![OUT_OF_BAND; n2 + 1],
        vec![OUT_OF_BAND; n2 + 1],
        vec![OUT_OF_BAND; n2 + 1],
    ];
    // Range last written into each row slot, reset before the slot is reused.
    let mut written: [Option<(usize, usize)>; 3] = [None; 3];
    let (mut prev, mut cur, mut next) = (0, 1, 2);

    // Row 0 costs j at column j, so the cutoff itself bounds its band.
    let mut band = Some(Band {
        first: 0,
        last: max as usize,
    });

    for i in 0..=n1 {
        // No cell of the previous row stayed within the cutoff.
        let Some(Band { first, last }) = band else {
            return Distance::TooFar;
        };

        let end = last.saturating_add(1).min(n2);
        if !prefix_tolerant && i == n1 && end < n2 {
            return Distance::TooFar;
        }

        if let Some((lo, hi)) = written[next].take() {
            rows[next][lo..=hi].fill(OUT_OF_BAND);
        }
        stats.rows_evaluated += 1;

        let mut next_band: Option<Band> = None;
        let mut row_min = OUT_OF_BAND;
        let mut hi = first;

        for j in first..=end {
            stats.cells_evaluated += 1;

            let distance = if i == 0 || j == 0 {
                cost(i, INSERTION_COST).saturating_add(cost(j, DELETION_COST))
            } else {
                let (x, y) = (&outer[i - 1], &inner[j - 1]);

                let deletion = rows[next][j - 1].saturating_add(DELETION_COST);
                let insertion = rows[cur][j].saturating_add(INSERTION_COST);
                let substitution =
                    rows[cur][j - 1].saturating_add(if x == y { 0 } else { SUBSTITUTION_COST });
                let mut distance = deletion.min(insertion).min(substitution);

                if i > 1 && j > 1 && *x == inner[j - 2] && outer[i - 2] == *y {
                    distance = distance.min(rows[prev][j - 2].saturating_add(TRANSPOSITION_COST));
                }
                distance
            };

            rows[next][j] = distance;
            hi = j;
            row_min = row_min.min(distance);

            if distance <= max {
                next_band = Some(match next_band {
                    Some(band) => Band { last: j, ..band },
                    None => Band { first: j, last: j },
                });
            } else if i == n1 && j > last {
                // Everything further right on the final row is over the cutoff too.
                break;
            }
        }
        written[next] = Some((first, hi));

        (prev, cur, next) = (cur, next, prev);
        band = next_band;

        if prefix_tolerant && i == n1 {
            return Distance::bounded(row_min, max);
        }
    }

    Distance::bounded(rows[cur][n2], max)
}

fn cost(count: usize, unit: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(OUT_OF_BAND)
        .saturating_mul(unit)
}
