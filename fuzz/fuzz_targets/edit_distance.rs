// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded edit distance.
//!
//! Checks the banded result against the unbounded one under every cutoff,
//! plus symmetry and the length lower bound. A band that drops a live cell
//! shows up here as a finite value that disagrees with the full matrix.

#![no_main]

use arbitrary::Arbitrary;
use lexmatch::{edit_distance, Distance, UNBOUNDED};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max_distance: u8,
    prefix_tolerant: bool,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts on the unbounded reference
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = u32::from(input.max_distance % 16);
    let prefix = input.prefix_tolerant;

    let exact = edit_distance(&a, &b, UNBOUNDED, prefix);
    let Distance::Finite(d) = exact else {
        panic!("unbounded distance was too far: {:?} {:?}", a, b);
    };

    let bounded = edit_distance(&a, &b, max, prefix);
    if d <= max {
        assert_eq!(bounded, exact, "cutoff {} changed the distance", max);
    } else {
        assert_eq!(bounded, Distance::TooFar, "distance {} leaked past cutoff {}", d, max);
    }

    if !prefix {
        assert_eq!(exact, edit_distance(&b, &a, UNBOUNDED, false), "not symmetric");
        let diff = a.chars().count().abs_diff(b.chars().count()) as u32;
        assert!(d >= diff, "distance {} below length difference {}", d, diff);
    } else {
        assert!(exact <= edit_distance(&a, &b, UNBOUNDED, false));
    }
});
