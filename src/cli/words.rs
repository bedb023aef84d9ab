// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate loading for `lexmatch suggest`.
//!
//! A word list is either plain text, one form per line, or a JSON array. JSON
//! entries are kept as values so the matcher's extractor decides what to
//! compare: strings compare as themselves, objects through `--field`. Entries
//! without a usable form stay in the list and are skipped by the matcher.

use lexmatch::Error;
use serde_json::Value;
use std::path::Path;

pub fn load_candidates(path: &Path) -> lexmatch::Result<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_candidates(&text, path)
}

fn parse_candidates(text: &str, origin: &Path) -> lexmatch::Result<Vec<Value>> {
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    if !trimmed.starts_with('[') && !trimmed.starts_with('{') {
        return Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Value::String(line.to_owned()))
            .collect());
    }

    match serde_json::from_str(trimmed) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(Error::InvalidInput(format!(
            "{}: expected a JSON array of forms, found {}",
            origin.display(),
            json_kind(&other)
        ))),
        Err(source) => Err(Error::Config {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

/// The form of a candidate: the value itself, or `field` of an object.
pub fn candidate_form<'a>(value: &'a Value, field: Option<&str>) -> Option<&'a str> {
    match field {
        Some(field) => value.get(field).and_then(Value::as_str),
        None => value.as_str(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
