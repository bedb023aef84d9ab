// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for closest-form matching.
//!
//! Every reported match must sit at its tier's distance, tiers must be
//! disjoint and ordered, and nothing past the max distance may appear.

#![no_main]

use arbitrary::Arbitrary;
use lexmatch::{edit_distance, find_closest_forms, nfd, Distance, MatchOptions, UNBOUNDED};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    forms: Vec<Option<String>>,
    options: u8,
    max_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    let query: String = input.query.chars().take(24).collect();
    let forms: Vec<Option<String>> = input
        .forms
        .into_iter()
        .take(64)
        .map(|f| f.map(|s| s.chars().take(24).collect()))
        .collect();
    let options = match input.options % 4 {
        0 => MatchOptions::NONE,
        1 => MatchOptions::INCLUDE_PREFIXED_FORMS,
        2 => MatchOptions::INCLUDE_NEXT_CLOSEST_FORMS,
        _ => MatchOptions::INCLUDE_PREFIXED_AND_NEXT_CLOSEST_FORMS,
    };
    let max = u32::from(input.max_distance % 8);
    let prefixed = options.includes_prefixed_forms();

    let result = find_closest_forms(
        forms.iter().enumerate(),
        |(_, form)| form.as_deref(),
        &query,
        options,
        max,
    );

    let query = nfd(&query);
    let check_tier = |distance: Distance, matches: &[(usize, &Option<String>)]| {
        for (_, form) in matches {
            let form = form.as_deref().map(nfd).unwrap_or_default();
            assert!(!form.is_empty(), "skipped form was matched");
            assert_eq!(edit_distance(&query, &form, UNBOUNDED, prefixed), distance);
        }
        assert_eq!(distance.is_finite(), !matches.is_empty());
        if let Distance::Finite(d) = distance {
            assert!(d <= max);
        }
    };

    check_tier(result.best_distance(), result.best_matches());
    if let Some(second) = &result.second_best {
        check_tier(second.distance, &second.matches);
        if let (Distance::Finite(b), Distance::Finite(s)) = (result.best_distance(), second.distance) {
            assert!(b < s);
        }
        for (i, _) in &second.matches {
            assert!(result.best_matches().iter().all(|(j, _)| j != i));
        }
    } else {
        assert!(!options.includes_next_closest_forms());
    }
});
