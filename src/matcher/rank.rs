// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full ordering of a collection by distance to a query.
//!
//! Where [`find_closest_forms`](super::find_closest_forms) keeps only the top
//! tiers, this keeps every item and sorts: distance first, then the form
//! compared case-insensitively. Useful for pickers where the closest items
//! should float to the top but nothing should disappear.

use crate::fuzzy::{edit_distance, Distance};
use crate::utils::nfd;

/// Sort `items` by edit distance from `query`, then by lower-cased form.
///
/// Items further than `cutoff`, and items with no form, are kept and sorted
/// last as [`Distance::TooFar`]. The sort is stable, so items with equal keys
/// keep their input order.
///
/// ```
/// use lexmatch::{rank_by_distance, Distance};
///
/// let ranked = rank_by_distance(["German", "Frenchy", "english", "French"], |l| Some(*l), "french", 3);
/// let names: Vec<_> = ranked.iter().map(|(_, name)| *name).collect();
/// assert_eq!(names, ["French", "Frenchy", "english", "German"]);
/// assert_eq!(ranked[0].0, Distance::Finite(1));
/// assert_eq!(ranked[3].0, Distance::TooFar);
/// ```
pub fn rank_by_distance<T, I, E>(items: I, mut extract: E, query: &str, cutoff: u32) -> Vec<(Distance, T)>
where
    I: IntoIterator<Item = T>,
    E: FnMut(&T) -> Option<&str>,
{
    let query = nfd(query);
    let mut keyed: Vec<(Distance, String, T)> = items
        .into_iter()
        .map(|item| {
            let (distance, key) = match extract(&item) {
                Some(form) => {
                    let form = nfd(form);
                    let distance = edit_distance(&query, &form, cutoff, false);
                    (distance, form.to_lowercase())
                }
                None => (Distance::TooFar, String::new()),
            };
            (distance, key, item)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    keyed.into_iter().map(|(distance, _, item)| (distance, item)).collect()
}
