// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closest-form matching built on the bounded edit distance.
//!
//! - `options`: which extra forms to return (prefixed, next-closest)
//! - `result`: best and second-best tiers
//! - `closest`: the tier-tracking matcher and its convenience entry points
//! - `rank`: full ordering of a collection by distance

mod closest;
mod options;
mod rank;
mod result;

pub use closest::{
    closest_forms, closest_forms_with_options, find_closest_forms,
    find_closest_forms_with_options, ClosestFormsMatcher, DEFAULT_MAX_DISTANCE,
};
pub use options::MatchOptions;
pub use rank::rank_by_distance;
pub use result::{MatchResult, Tier};
