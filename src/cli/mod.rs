// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldfinder command-line interface.
//!
//! Two subcommands: `search` to ask a question of a cheat sheet, and
//! `inspect` to check that a sheet loads and see what is in it.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fieldfinder",
    about = "Find which report holds a field by asking in plain words",
    version
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank cheat sheet rows against a question
    Search {
        /// Path to the cheat sheet (.csv or .json)
        sheet: PathBuf,

        /// The question, e.g. "Where can I find agency delivery zone codes?"
        query: String,

        /// Number of results to show (1-10)
        #[arg(
            short = 'k',
            long,
            default_value_t = 3,
            value_parser = clap::value_parser!(u16).range(1..=10)
        )]
        limit: u16,

        /// Show the per-signal score breakdown for each result
        #[arg(long)]
        explain: bool,

        /// Print results as JSON instead of formatted text
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Validate a cheat sheet and summarize its contents
    Inspect {
        /// Path to the cheat sheet (.csv or .json)
        sheet: PathBuf,
    },
}
