// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match options: which extra forms the matcher returns.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bit-set of matcher behaviours.
///
/// ```
/// use lexmatch::MatchOptions;
///
/// let options = MatchOptions::INCLUDE_PREFIXED_FORMS | MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS;
/// assert_eq!(options, MatchOptions::INCLUDE_PREFIXED_AND_NEXT_CLOSEST_FORMS);
/// assert_eq!("prefixed|next-closest".parse::<MatchOptions>().unwrap(), options);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatchOptions(u8);

impl MatchOptions {
    /// Closest forms only.
    pub const NONE: Self = Self(0);
    /// Compare the query against prefixes of each form, so "dist" matches
    /// "distance" at distance 0.
    pub const INCLUDE_PREFIXED_FORMS: Self = Self(1);
    /// Also return the tier of forms at the next larger distance.
    pub const INCLUDE_NEXT_CLOSEST_FORMS: Self = Self(2);
    pub const INCLUDE_PREFIXED_AND_NEXT_CLOSEST_FORMS: Self = Self(3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn includes_prefixed_forms(self) -> bool {
        self.contains(Self::INCLUDE_PREFIXED_FORMS)
    }

    pub const fn includes_next_closest_forms(self) -> bool {
        self.contains(Self::INCLUDE_NEXT_CLOSEST_FORMS)
    }
}

impl BitOr for MatchOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MatchOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Parses `none`, `prefixed`, `next-closest`, `prefixed-and-next-closest`, or
/// flag names joined with `|`. Case, `-`, `_` and the `Include`/`Forms`
/// wrapping are ignored, so `IncludePrefixedForms` is accepted too.
impl FromStr for MatchOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = MatchOptions::NONE;
        for part in s.split('|') {
            let key: String = part
                .chars()
                .filter(|c| !matches!(c, '-' | '_' | ' '))
                .flat_map(char::to_lowercase)
                .collect();
            let key = key.strip_prefix("include").unwrap_or(&key);
            let key = key.strip_suffix("forms").unwrap_or(key);

            options |= match key {
                "none" => MatchOptions::NONE,
                "prefixed" => MatchOptions::INCLUDE_PREFIXED_FORMS,
                "nextclosest" => MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS,
                "prefixedandnextclosest" => MatchOptions::INCLUDE_PREFIXED_AND_NEXT_CLOSEST_FORMS,
                _ => return Err(Error::UnknownOption(part.trim().to_string())),
            };
        }
        Ok(options)
    }
}

impl fmt::Display for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            MatchOptions::NONE => "none",
            MatchOptions::INCLUDE_PREFIXED_FORMS => "prefixed",
            MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS => "next-closest",
            _ => "prefixed-and-next-closest",
        };
        f.write_str(name)
    }
}

impl TryFrom<String> for MatchOptions {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchOptions> for String {
    fn from(options: MatchOptions) -> Self {
        options.to_string()
    }
}
