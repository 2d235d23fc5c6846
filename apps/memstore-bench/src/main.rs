//! Timing harness for the in-memory table layouts.
//!
//! Loads rows once (CSV file or seeded random data), then times the four
//! hard-wired operations:
//! - `SELECT SUM(col0)`
//! - `SELECT SUM(col0) WHERE col1 > t1 AND col2 < t2`
//! - `SELECT SUM(all columns) WHERE col0 > t`
//! - `UPDATE SET col3 = col3 + col2 WHERE col0 < t`

mod benchmarks;
mod cli;
mod config;
mod utils;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::BenchConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let base = match &cli.config {
        Some(path) => BenchConfig::from_file(path)?,
        None => BenchConfig::default(),
    };

    match cli.command {
        Commands::Run {
            workload,
            layout,
            index_column,
            json,
        } => {
            let mut config = base.merge(workload);
            config.table.layout = layout.unwrap_or(config.table.layout);
            config.table.index_column = index_column.unwrap_or(config.table.index_column);
            config.validate()?;
            benchmarks::run::run_single_layout(&config, json)
        }
        Commands::Compare { workload } => {
            let config = base.merge(workload);
            config.validate()?;
            benchmarks::compare::run_comparison(&config)
        }
    }
}
