// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! lexmatch CLI.

use anyhow::Result;
use clap::Parser;

mod cli;
use cli::commands::{run_distance, run_suggest};
use cli::display::use_colors_stderr;
use cli::logging::{init_logging, LogConfig};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format.into())
        .with_ansi(use_colors_stderr())
        .with_target(cli.verbose > 1);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match &cli.command {
        Commands::Suggest(args) => run_suggest(args),
        Commands::Distance(args) => run_distance(args),
    }
}
