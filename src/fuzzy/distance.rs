// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The result type of a bounded edit-distance computation.
//!
//! A bounded computation either finds the exact distance or proves that it
//! exceeds the cutoff. Those are different facts, so they get different
//! variants instead of a reserved integer. `TooFar` orders after every finite
//! distance, which lets callers compare results with plain `<`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Edit distance between two forms, as far as the cutoff allowed us to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// Exact distance, no larger than the cutoff it was computed under.
    Finite(u32),
    /// The distance provably exceeds the cutoff.
    TooFar,
}

/// Sentinel for "larger than the active cutoff".
pub const LARGER_THAN_MAX: Distance = Distance::TooFar;

impl Distance {
    /// Exact distance, if one was found.
    pub fn finite(self) -> Option<u32> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::TooFar => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Is this distance within `max` edits?
    pub fn is_within(self, max: u32) -> bool {
        matches!(self, Distance::Finite(d) if d <= max)
    }

    /// Apply a cutoff to a raw distance.
    pub(crate) fn bounded(raw: u32, max: u32) -> Self {
        if raw <= max {
            Distance::Finite(raw)
        } else {
            Distance::TooFar
        }
    }
}

impl From<Distance> for Option<u32> {
    fn from(distance: Distance) -> Self {
        distance.finite()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::TooFar => write!(f, ">max"),
        }
    }
}

/// Finite distances serialize as numbers, `TooFar` as `null`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_some(d),
            Distance::TooFar => serializer.serialize_none(),
        }
    }
}
