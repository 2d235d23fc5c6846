//! Table storage error types.

use thiserror::Error;

/// Fatal errors raised while loading rows into a table.
///
/// A failed load never produces a table value, so a partially populated
/// layout is never observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Input has fewer columns than the hard-wired queries reference
    #[error("Table needs at least {required} columns, input has {num_cols}")]
    TooFewColumns { num_cols: usize, required: usize },

    /// A row does not have exactly `num_cols` fields
    #[error("Row {row} has {got} fields, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Index column does not exist in the loaded schema
    #[error("Index column {index_column} out of range (table has {num_cols} columns)")]
    IndexColumnOutOfRange { index_column: usize, num_cols: usize },

    /// Input text could not be parsed as integer rows
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(String),
}

/// Table operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Load failed; no table was created
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    /// Field coordinate outside the table
    #[error("Field ({row}, {col}) out of range for {num_rows}x{num_cols} table")]
    OutOfRange {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },

    /// Buffer size calculation overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },

    /// Derived state disagrees with primary data
    #[error("Data corruption detected: {0}")]
    DataCorruption(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
