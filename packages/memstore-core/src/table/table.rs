//! Query contract shared by every table layout.

use crate::error::Result;

/// Field access plus the four hard-wired queries.
///
/// Every layout answers from its own structures only. Given the same input
/// rows, all layouts return identical results for every operation.
pub trait Table {
    /// Number of rows, fixed at load time.
    fn num_rows(&self) -> usize;

    /// Number of columns, fixed at load time.
    fn num_cols(&self) -> usize;

    /// Returns the field at (`row`, `col`).
    ///
    /// # Errors
    /// [`StoreError::OutOfRange`](crate::error::StoreError::OutOfRange) for a
    /// coordinate outside the table.
    fn get_int_field(&self, row: usize, col: usize) -> Result<i32>;

    /// Overwrites the field at (`row`, `col`), keeping any derived state in step.
    ///
    /// # Errors
    /// [`StoreError::OutOfRange`](crate::error::StoreError::OutOfRange) for a
    /// coordinate outside the table. Nothing is modified in that case.
    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()>;

    /// `SELECT SUM(col0) FROM table`
    fn column_sum(&self) -> i64;

    /// `SELECT SUM(col0) FROM table WHERE col1 > threshold1 AND col2 < threshold2`
    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64;

    /// `SELECT SUM(col0) + ... + SUM(colN) FROM table WHERE col0 > threshold`
    fn predicated_all_columns_sum(&self, threshold: i32) -> i64;

    /// `UPDATE table SET col3 = col3 + col2 WHERE col0 < threshold`
    ///
    /// The addition wraps on overflow. Returns the number of rows matched.
    fn predicated_update(&mut self, threshold: i32) -> usize;
}
