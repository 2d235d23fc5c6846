use anyhow::Context;
use memstore_core::{CsvLoader, DataLoader, RowsLoader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BenchConfig;

/// Loader producing uniformly random rows in `[0, max_value)`.
#[derive(Debug, Clone)]
pub struct RandomLoader {
    inner: RowsLoader,
}

impl RandomLoader {
    pub fn generate(num_rows: usize, num_cols: usize, max_value: i32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..num_rows)
            .map(|_| (0..num_cols).map(|_| rng.gen_range(0..max_value)).collect())
            .collect();
        Self {
            inner: RowsLoader::new(num_cols, rows),
        }
    }
}

impl DataLoader for RandomLoader {
    fn num_cols(&self) -> usize {
        self.inner.num_cols()
    }

    fn rows(&self) -> &[Vec<i32>] {
        self.inner.rows()
    }
}

/// Builds the configured row source: the CSV input if set, random rows otherwise.
pub fn load_source(config: &BenchConfig) -> anyhow::Result<Box<dyn DataLoader>> {
    match &config.input {
        Some(path) => {
            tracing::info!("Reading rows from {}", path.display());
            let loader = CsvLoader::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(Box::new(loader))
        }
        None => {
            tracing::info!(
                "Generating {} rows x {} columns (max {}, seed {})",
                config.rows,
                config.cols,
                config.max_value,
                config.seed
            );
            Ok(Box::new(RandomLoader::generate(
                config.rows,
                config.cols,
                config.max_value,
                config.seed,
            )))
        }
    }
}
