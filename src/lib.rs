//! Approximate matching of a query against a collection of forms.
//!
//! Suggests dictionary headwords, keywords, or other lexical forms that are
//! close to what a user typed. Two layers:
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────┐      ┌──────────────────────────┐
//! │       matcher/         │─────▶│         fuzzy/           │
//! │  find_closest_forms    │ one  │  edit_distance           │
//! │  (NFD, tiers, cutoff)  │ call │  (banded OSA, cutoff,    │
//! │  rank_by_distance      │ per  │   prefix-tolerant mode)  │
//! └────────────────────────┘ item └──────────────────────────┘
//!            │                                │
//!            ▼                                ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                      contracts.rs                          │
//! │  (cutoff respected, tiers ordered, tiers consistent)       │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure; the matcher owns all ranking state for one call and
//! nothing outlives it.
//!
//! # Usage
//!
//! ```
//! use lexmatch::{find_closest_forms, Distance, MatchOptions, DEFAULT_MAX_DISTANCE};
//!
//! let headwords = ["distance", "distances", "destance", "instance"];
//! let result = find_closest_forms(
//!     headwords,
//!     |h| Some(*h),
//!     "distanse",
//!     MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS,
//!     DEFAULT_MAX_DISTANCE,
//! );
//!
//! assert_eq!(result.best_distance(), Distance::Finite(1));
//! assert_eq!(result.best_matches(), ["distance"]);
//! assert_eq!(result.second_best_matches(), ["distances", "destance"]);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod matcher;
mod utils;

// Re-exports for public API
pub use config::MatcherConfig;
pub use error::{Error, Result};
pub use fuzzy::{
    edit_distance, edit_distance_slices, edit_distance_with_stats, Distance, EditStats,
    LARGER_THAN_MAX, UNBOUNDED,
};
pub use matcher::{
    closest_forms, closest_forms_with_options, find_closest_forms,
    find_closest_forms_with_options, rank_by_distance, ClosestFormsMatcher, MatchOptions,
    MatchResult, Tier, DEFAULT_MAX_DISTANCE,
};
pub use utils::{char_len, nfd};
