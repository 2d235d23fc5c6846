//! Row sources consumed by table loads.
//!
//! A loader supplies a column count and an ordered sequence of integer rows.
//! Tables copy the rows eagerly and keep no reference to the loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;

/// Source of fixed-width integer rows.
pub trait DataLoader {
    /// Number of columns every row is expected to carry.
    fn num_cols(&self) -> usize;

    /// Rows in load order.
    fn rows(&self) -> &[Vec<i32>];
}

/// Loader over rows already held in memory.
#[derive(Debug, Clone, Default)]
pub struct RowsLoader {
    num_cols: usize,
    rows: Vec<Vec<i32>>,
}

impl RowsLoader {
    pub fn new(num_cols: usize, rows: Vec<Vec<i32>>) -> Self {
        Self { num_cols, rows }
    }
}

impl DataLoader for RowsLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

/// Loader for comma-separated integer text.
///
/// One row per line, no header. Blank lines are skipped. The column count is
/// the width of the first row and every later row must match it.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    inner: RowsLoader,
}

impl CsvLoader {
    /// Parses all rows from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        let mut num_cols = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let row = trimmed
                .split(',')
                .map(|field| {
                    field.trim().parse::<i32>().map_err(|e| LoadError::Parse {
                        line: line_no,
                        message: format!("invalid integer '{}': {}", field.trim(), e),
                    })
                })
                .collect::<Result<Vec<i32>, LoadError>>()?;

            if rows.is_empty() {
                num_cols = row.len();
            } else if row.len() != num_cols {
                return Err(LoadError::Parse {
                    line: line_no,
                    message: format!("expected {} fields, found {}", num_cols, row.len()),
                });
            }
            rows.push(row);
        }

        tracing::debug!("Parsed {} rows of {} columns", rows.len(), num_cols);

        Ok(Self {
            inner: RowsLoader::new(num_cols, rows),
        })
    }

    /// Opens and parses the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}

impl DataLoader for CsvLoader {
    fn num_cols(&self) -> usize {
        self.inner.num_cols()
    }

    fn rows(&self) -> &[Vec<i32>] {
        self.inner.rows()
    }
}
