// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use super::display::{dim, distance_label, pad_left, query_heading, tier_heading};
use super::words::{candidate_form, load_candidates};
use super::{DistanceArgs, SuggestArgs};
use anyhow::{Context, Result};
use lexmatch::{
    edit_distance, nfd, ClosestFormsMatcher, MatchResult, MatcherConfig, Tier, UNBOUNDED,
};
use serde_json::{json, Value};
use tracing::info;

pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => MatcherConfig::from_json_file(path)?,
        None => MatcherConfig::default(),
    }
    .with_overrides(args.options, args.max_distance);

    let candidates = load_candidates(&args.words)
        .with_context(|| format!("loading word list {}", args.words.display()))?;
    info!(
        count = candidates.len(),
        options = %config.options,
        max_distance = config.max_distance,
        "loaded candidates"
    );

    let matcher = ClosestFormsMatcher::from_config(&config);
    let field = args.field.as_deref();
    let results: Vec<(&str, MatchResult<&Value>)> = args
        .queries
        .iter()
        .map(|query| {
            let result = matcher.find(&candidates, |v| candidate_form(v, field), query);
            (query.as_str(), result)
        })
        .collect();

    if args.json {
        let out: Vec<Value> = results
            .iter()
            .map(|(query, result)| json!({ "query": query, "result": result }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (i, (query, result)) in results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_result(query, result, field);
        }
    }
    Ok(())
}

fn print_result(query: &str, result: &MatchResult<&Value>, field: Option<&str>) {
    println!("{}", query_heading(query));
    if result.is_empty() {
        println!("  {}", dim("no close matches"));
        return;
    }
    print_tier("best", &result.best, field);
    if let Some(second) = &result.second_best {
        if !second.is_empty() {
            print_tier("next", second, field);
        }
    }
}

fn print_tier(name: &str, tier: &Tier<&Value>, field: Option<&str>) {
    println!("  {}", tier_heading(name, tier.len()));
    let label = pad_left(&distance_label(tier.distance), 4);
    for item in &tier.matches {
        let form = candidate_form(item, field).unwrap_or_default();
        println!("  {}  {}", label, form);
    }
}

pub fn run_distance(args: &DistanceArgs) -> Result<()> {
    let max = args.max_distance.unwrap_or(UNBOUNDED);
    let distance = edit_distance(&nfd(&args.a), &nfd(&args.b), max, args.prefix);
    println!("{}", distance_label(distance));
    Ok(())
}
