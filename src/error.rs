// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from the layers around the matcher.
//!
//! Matching itself cannot fail: a candidate that is too far away is a
//! `Distance::TooFar`, and no matches is an empty tier. What can fail is
//! everything that feeds it, like reading a word list or a config file.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible lexmatch operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A match option name that is not one of the known flags.
    #[error("unknown match option '{0}' (expected none, prefixed, next-closest or prefixed-and-next-closest)")]
    UnknownOption(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input that parsed but cannot be used, e.g. a word list of numbers.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Config {
            path: path.into(),
            source,
        }
    }
}
