// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked output of the matcher: a best tier and an optional second tier.

use crate::fuzzy::Distance;
use serde::Serialize;

/// All items found at one distance, in the order they were offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier<T> {
    pub distance: Distance,
    pub matches: Vec<T>,
}

impl<T> Tier<T> {
    pub(crate) fn empty() -> Self {
        Self {
            distance: Distance::TooFar,
            matches: Vec::new(),
        }
    }

    pub(crate) fn single(distance: u32, item: T) -> Self {
        Self {
            distance: Distance::Finite(distance),
            matches: vec![item],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    fn map<U>(self, f: &mut impl FnMut(T) -> U) -> Tier<U> {
        Tier {
            distance: self.distance,
            matches: self.matches.into_iter().map(f).collect(),
        }
    }
}

/// Closest matches for one query.
///
/// `second_best` is `Some` exactly when the matcher was asked for next-closest
/// forms, even if no item landed in it. Both tiers keep input order, and every
/// item in `best` is strictly closer than every item in `second_best`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<T> {
    pub best: Tier<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_best: Option<Tier<T>>,
}

impl<T> MatchResult<T> {
    /// `TooFar` when nothing matched.
    pub fn best_distance(&self) -> Distance {
        self.best.distance
    }

    pub fn best_matches(&self) -> &[T] {
        &self.best.matches
    }

    pub fn second_best_distance(&self) -> Option<Distance> {
        self.second_best.as_ref().map(|tier| tier.distance)
    }

    /// Empty unless next-closest forms were requested and found.
    pub fn second_best_matches(&self) -> &[T] {
        match &self.second_best {
            Some(tier) => &tier.matches,
            None => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty() && self.second_best_matches().is_empty()
    }

    /// Total matches across both tiers.
    pub fn len(&self) -> usize {
        self.best.len() + self.second_best_matches().len()
    }

    /// Best tier first, then second tier.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.best.matches.iter().chain(self.second_best_matches())
    }

    /// Flatten into a single list: best tier first, then second tier.
    pub fn into_matches(self) -> Vec<T> {
        let mut matches = self.best.matches;
        if let Some(second) = self.second_best {
            matches.extend(second.matches);
        }
        matches
    }

    /// Transform every match, keeping tiers and order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MatchResult<U> {
        let best = self.best.map(&mut f);
        MatchResult {
            best,
            second_best: self.second_best.map(|tier| tier.map(&mut f)),
        }
    }
}

impl<T> IntoIterator for MatchResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_matches().into_iter()
    }
}
