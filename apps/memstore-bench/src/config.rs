//! Benchmark configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use memstore_core::TableConfig;
use serde::{Deserialize, Serialize};

use crate::cli::WorkloadArgs;

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// CSV input; random rows are generated when `None`
    pub input: Option<PathBuf>,
    /// Generated row count
    pub rows: usize,
    /// Generated column count
    pub cols: usize,
    /// Upper bound (exclusive) of generated values
    pub max_value: i32,
    /// Seed for generated values
    pub seed: u64,
    /// Rounds of the query mix
    pub iterations: usize,
    pub threshold1: i32,
    pub threshold2: i32,
    pub all_columns_threshold: i32,
    pub update_threshold: i32,
    /// Layout and index column for `run`
    pub table: TableConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: None,
            rows: 100_000,
            cols: 16,
            max_value: 1_024,
            seed: 42,
            iterations: 10,
            threshold1: 512,
            threshold2: 512,
            all_columns_threshold: 900,
            update_threshold: 100,
            table: TableConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Reads a JSON config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Applies CLI overrides on top of this config.
    pub fn merge(mut self, args: WorkloadArgs) -> Self {
        if args.input.is_some() {
            self.input = args.input;
        }
        self.rows = args.rows.unwrap_or(self.rows);
        self.cols = args.cols.unwrap_or(self.cols);
        self.max_value = args.max_value.unwrap_or(self.max_value);
        self.seed = args.seed.unwrap_or(self.seed);
        self.iterations = args.iterations.unwrap_or(self.iterations);
        self.threshold1 = args.threshold1.unwrap_or(self.threshold1);
        self.threshold2 = args.threshold2.unwrap_or(self.threshold2);
        self.all_columns_threshold = args
            .all_columns_threshold
            .unwrap_or(self.all_columns_threshold);
        self.update_threshold = args.update_threshold.unwrap_or(self.update_threshold);
        self
    }

    /// Rejects settings the harness cannot run.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.iterations == 0 {
            anyhow::bail!("iterations must be greater than 0");
        }
        if self.input.is_none() && self.max_value <= 0 {
            anyhow::bail!("max_value must be greater than 0");
        }
        Ok(())
    }
}
