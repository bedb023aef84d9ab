// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitive: bounded edit distance.
//!
//! One engine, two modes. The plain mode is a symmetric optimal string
//! alignment distance; the prefix-tolerant mode lets a short query match the
//! start of a longer form for free. Both abandon the computation as soon as the
//! cutoff is provably exceeded.

mod distance;
mod edit_distance;

pub use distance::*;
pub use edit_distance::*;
