// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher settings loaded from JSON.
//!
//! ```json
//! { "options": "prefixed|next-closest", "maxDistance": 2 }
//! ```
//!
//! Both keys are optional; missing keys fall back to no options and a max
//! distance of 999.

use crate::error::{Error, Result};
use crate::matcher::{MatchOptions, DEFAULT_MAX_DISTANCE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MatcherConfig {
    pub options: MatchOptions,
    pub max_distance: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            options: MatchOptions::NONE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl MatcherConfig {
    /// Parse a config from JSON text. `origin` names the source in errors.
    pub fn from_json_str(json: &str, origin: impl AsRef<Path>) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(origin.as_ref(), e))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json, path)
    }

    /// Replace the fields that were given explicitly, e.g. from CLI flags.
    pub fn with_overrides(mut self, options: Option<MatchOptions>, max_distance: Option<u32>) -> Self {
        if let Some(options) = options {
            self.options = options;
        }
        if let Some(max_distance) = max_distance {
            self.max_distance = max_distance;
        }
        self
    }
}
