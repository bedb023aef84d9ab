// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closest-form matching over a collection of caller items.
//!
//! Every item is reduced to a form by the caller's extractor, normalized to
//! NFD, and compared against the (equally normalized) query. The matcher keeps
//! the tier of items at the smallest distance seen so far and, when asked, the
//! tier at the next larger distance.
//!
//! The cutoff handed to the engine shrinks as better tiers are found: once an
//! item at distance 1 is known, a candidate that would land at 4 is abandoned
//! by the banded engine after a few rows.

use super::options::MatchOptions;
use super::result::{MatchResult, Tier};
use crate::config::MatcherConfig;
use crate::contracts::{check_tier_consistent, check_tiers_ordered};
use crate::fuzzy::{edit_distance, Distance};
use crate::utils::nfd;
use tracing::{debug, trace};

/// Max distance used when the caller does not pick one.
pub const DEFAULT_MAX_DISTANCE: u32 = 999;

/// Running best and second-best tiers for one matching call.
struct TierTracker<T> {
    best: Tier<T>,
    /// `None` when next-closest forms were not requested.
    second: Option<Tier<T>>,
}

impl<T> TierTracker<T> {
    fn new(track_second: bool) -> Self {
        Self {
            best: Tier::empty(),
            second: track_second.then(Tier::empty),
        }
    }

    /// The largest distance that can still change the result.
    fn cutoff(&self, max_distance: u32) -> u32 {
        let worst = match &self.second {
            Some(second) => second.distance,
            None => self.best.distance,
        };
        match worst {
            Distance::Finite(d) => d.min(max_distance),
            Distance::TooFar => max_distance,
        }
    }

    fn offer(&mut self, item: T, distance: u32) {
        let d = Distance::Finite(distance);

        if d < self.best.distance {
            let previous = std::mem::replace(&mut self.best, Tier::single(distance, item));
            match self.second.as_mut() {
                Some(second) if previous.distance.is_finite() => {
                    trace!(from = %previous.distance, to = distance, "demoting best tier");
                    *second = previous;
                }
                _ => trace!(distance, "new best tier"),
            }
        } else if d == self.best.distance {
            self.best.matches.push(item);
        } else if let Some(second) = self.second.as_mut() {
            if d < second.distance {
                trace!(distance, "new second tier");
                *second = Tier::single(distance, item);
            } else if d == second.distance {
                second.matches.push(item);
            }
        }

        check_tiers_ordered(self.best.distance, self.second.as_ref().map(|t| t.distance));
        check_tier_consistent(self.best.distance, self.best.len());
        if let Some(second) = &self.second {
            check_tier_consistent(second.distance, second.len());
        }
    }

    fn finish(self) -> MatchResult<T> {
        MatchResult {
            best: self.best,
            second_best: self.second,
        }
    }
}

/// Find the items whose extracted form is closest to `query`.
///
/// `extract` returns the text to compare for an item. Items for which it
/// returns `None` or an empty string are skipped and never appear in the
/// result. Items further than `max_distance` from the query are dropped.
///
/// ```
/// use lexmatch::{find_closest_forms, Distance, MatchOptions};
///
/// struct Entry { headword: &'static str }
/// let entries = [Entry { headword: "cat" }, Entry { headword: "bat" }, Entry { headword: "dog" }];
///
/// let result = find_closest_forms(
///     &entries,
///     |e| Some(e.headword),
///     "cot",
///     MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS,
///     2,
/// );
/// assert_eq!(result.best_distance(), Distance::Finite(1));
/// assert_eq!(result.best_matches()[0].headword, "cat");
/// assert_eq!(result.second_best_matches()[0].headword, "bat");
/// ```
pub fn find_closest_forms<T, I, E>(
    items: I,
    mut extract: E,
    query: &str,
    options: MatchOptions,
    max_distance: u32,
) -> MatchResult<T>
where
    I: IntoIterator<Item = T>,
    E: FnMut(&T) -> Option<&str>,
{
    let query = nfd(query);
    let prefixed = options.includes_prefixed_forms();
    let mut tiers = TierTracker::new(options.includes_next_closest_forms());

    let mut seen = 0usize;
    let mut skipped = 0usize;
    let mut compared = 0usize;

    for item in items {
        seen += 1;
        let form = match extract(&item) {
            Some(form) if !form.is_empty() => nfd(form),
            _ => {
                skipped += 1;
                continue;
            }
        };
        if form.is_empty() {
            skipped += 1;
            continue;
        }

        compared += 1;
        let cutoff = tiers.cutoff(max_distance);
        match edit_distance(&query, &form, cutoff, prefixed) {
            Distance::Finite(d) if d <= max_distance => tiers.offer(item, d),
            _ => {}
        }
    }

    let result = tiers.finish();
    debug!(
        query = %query,
        %options,
        max_distance,
        seen,
        skipped,
        compared,
        best = result.best.len(),
        second = result.second_best_matches().len(),
        "closest forms"
    );
    result
}

/// [`find_closest_forms`] with [`DEFAULT_MAX_DISTANCE`].
pub fn find_closest_forms_with_options<T, I, E>(
    items: I,
    extract: E,
    query: &str,
    options: MatchOptions,
) -> MatchResult<T>
where
    I: IntoIterator<Item = T>,
    E: FnMut(&T) -> Option<&str>,
{
    find_closest_forms(items, extract, query, options, DEFAULT_MAX_DISTANCE)
}

/// Closest plain strings to `query`, best tier only.
pub fn closest_forms<S, I>(forms: I, query: &str) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    closest_forms_with_options(forms, query, MatchOptions::NONE)
}

/// Closest plain strings to `query`, flattened best tier first.
pub fn closest_forms_with_options<S, I>(forms: I, query: &str, options: MatchOptions) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    find_closest_forms_with_options(forms, |form: &S| Some(form.as_ref()), query, options)
        .into_matches()
}

/// Reusable matcher settings.
///
/// ```
/// use lexmatch::{ClosestFormsMatcher, MatchOptions};
///
/// let matcher = ClosestFormsMatcher::new()
///     .with_options(MatchOptions::INCLUDE_PREFIXED_FORMS)
///     .with_max_distance(1);
/// let result = matcher.find_forms(["distance", "destiny", "instance"], "dist");
/// assert_eq!(result.best_matches(), ["distance"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestFormsMatcher {
    options: MatchOptions,
    max_distance: u32,
}

impl Default for ClosestFormsMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosestFormsMatcher {
    pub const fn new() -> Self {
        Self {
            options: MatchOptions::NONE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self {
            options: config.options,
            max_distance: config.max_distance,
        }
    }

    pub const fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub const fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub const fn options(&self) -> MatchOptions {
        self.options
    }

    pub const fn max_distance(&self) -> u32 {
        self.max_distance
    }

    pub fn find<T, I, E>(&self, items: I, extract: E, query: &str) -> MatchResult<T>
    where
        I: IntoIterator<Item = T>,
        E: FnMut(&T) -> Option<&str>,
    {
        find_closest_forms(items, extract, query, self.options, self.max_distance)
    }

    pub fn find_forms<S, I>(&self, forms: I, query: &str) -> MatchResult<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find(forms, |form: &S| Some(form.as_ref()), query)
    }
}
