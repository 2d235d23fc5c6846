use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use memstore_core::LayoutKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with workload defaults (CLI flags take precedence)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time the query mix against one layout
    Run {
        #[command(flatten)]
        workload: WorkloadArgs,

        /// Layout to load (row, column, indexed-row, hybrid)
        #[arg(short, long)]
        layout: Option<LayoutKind>,

        /// Column carrying the secondary index (indexed-row only)
        #[arg(long)]
        index_column: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the query mix against every layout and check the results agree
    Compare {
        #[command(flatten)]
        workload: WorkloadArgs,
    },
}

/// Data source and query parameters shared by every command.
#[derive(Args, Debug, Default)]
pub struct WorkloadArgs {
    /// CSV file of integer rows (random data is generated when absent)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of generated rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of generated columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Generated values fall in [0, max_value)
    #[arg(long)]
    pub max_value: Option<i32>,

    /// Seed for generated data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rounds of the four-operation query mix
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// predicated_column_sum: col1 > threshold1
    #[arg(long, allow_negative_numbers = true)]
    pub threshold1: Option<i32>,

    /// predicated_column_sum: col2 < threshold2
    #[arg(long, allow_negative_numbers = true)]
    pub threshold2: Option<i32>,

    /// predicated_all_columns_sum: col0 > all_columns_threshold
    #[arg(long, allow_negative_numbers = true)]
    pub all_columns_threshold: Option<i32>,

    /// predicated_update: col0 < update_threshold
    #[arg(long, allow_negative_numbers = true)]
    pub update_threshold: Option<i32>,
}
