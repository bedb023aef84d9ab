// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexmatch command-line interface.
//!
//! Two subcommands: `suggest` to find the closest forms in a word list, and
//! `distance` to run the engine on a single pair.

pub mod commands;
pub mod display;
pub mod logging;
pub mod words;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lexmatch::MatchOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexmatch",
    about = "Suggest the closest headwords and keywords by edit distance",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v for per-query summaries, -vv for tier changes)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest forms to each query in a word list
    Suggest(SuggestArgs),

    /// Print the edit distance between two strings
    Distance(DistanceArgs),
}

#[derive(Args)]
pub struct SuggestArgs {
    /// One or more queries
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Word list: one form per line, or a JSON array of strings or objects
    #[arg(short, long, value_name = "FILE")]
    pub words: PathBuf,

    /// Object field holding the form, for JSON arrays of objects
    ///
    /// Entries without this field are skipped.
    #[arg(short, long, value_name = "NAME")]
    pub field: Option<String>,

    /// Match options: none, prefixed, next-closest, prefixed-and-next-closest,
    /// or flags joined with '|'
    #[arg(short, long)]
    pub options: Option<MatchOptions>,

    /// Largest distance a suggestion may have (default 999)
    #[arg(short = 'd', long)]
    pub max_distance: Option<u32>,

    /// JSON matcher config; flags given on the command line win
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DistanceArgs {
    pub a: String,

    pub b: String,

    /// Report anything larger as too far
    #[arg(short = 'd', long)]
    pub max_distance: Option<u32>,

    /// Cost of turning A into some prefix of B
    #[arg(long)]
    pub prefix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for logging::LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => logging::LogFormat::Pretty,
            LogFormatArg::Compact => logging::LogFormat::Compact,
            LogFormatArg::Json => logging::LogFormat::Json,
        }
    }
}
