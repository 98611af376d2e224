// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fieldfinder::{load_sheet, rank};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            sheet,
            query,
            limit,
            explain,
            json,
        } => run_search(&sheet, &query, usize::from(limit), explain, json),
        Commands::Inspect { sheet } => run_inspect(&sheet),
    }
}

fn run_search(sheet: &Path, query: &str, limit: usize, explain: bool, json: bool) -> Result<()> {
    let rows = load_sheet(sheet)
        .with_context(|| format!("Failed to load cheat sheet: {}", sheet.display()))?;
    debug!(rows = rows.len(), limit, "searching");

    let results = rank(query, &rows, limit)?;

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        display::print_results(&results, explain);
    }
    Ok(())
}

fn run_inspect(sheet: &Path) -> Result<()> {
    let rows = load_sheet(sheet)
        .with_context(|| format!("Failed to load cheat sheet: {}", sheet.display()))?;
    display::print_inspect(&sheet.display().to_string(), &rows);
    Ok(())
}
