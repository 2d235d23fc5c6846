//! Row-major table with an ordered secondary index and running caches.
//!
//! Besides the row-major buffer the table keeps:
//! - a [`SecondaryIndex`] on one designated column,
//! - the sum of every row (`row_sums`),
//! - the sum of column 0 (`col0_sum`).
//!
//! All three are updated by the single write path, [`IndexedRowTable::write_field`],
//! so they always agree with the buffer. Queries use the index only when it is
//! built on one of their predicate columns and fall back to a full scan
//! otherwise.

use crate::codec::{self, Order, Shape};
use crate::error::{LoadError, Result, StoreError};
use crate::loader::DataLoader;

use super::index::SecondaryIndex;
use super::table::Table;
use super::validation;

/// Row-major table with a secondary index on `index_column`.
#[derive(Debug, Clone)]
pub struct IndexedRowTable {
    shape: Shape,
    rows: Vec<u8>,
    index_column: usize,
    index: SecondaryIndex,
    row_sums: Vec<i64>,
    col0_sum: i64,
}

impl IndexedRowTable {
    /// Copies every row from `loader`, building the index and both caches.
    ///
    /// # Errors
    /// [`StoreError::Load`] for malformed input or an `index_column` outside
    /// the loaded schema.
    pub fn load(loader: &dyn DataLoader, index_column: usize) -> Result<Self> {
        let (num_rows, num_cols) = validation::validate_input(loader)?;
        if index_column >= num_cols {
            return Err(LoadError::IndexColumnOutOfRange {
                index_column,
                num_cols,
            }
            .into());
        }

        let shape = Shape::new(num_rows, num_cols, Order::RowMajor);
        let rows = validation::fill_buffer(loader, &shape);

        let mut index = SecondaryIndex::new();
        let mut row_sums = Vec::with_capacity(num_rows);
        let mut col0_sum = 0i64;
        for (row, fields) in loader.rows().iter().enumerate() {
            index.insert(fields[index_column], row);
            row_sums.push(fields.iter().map(|&v| v as i64).sum());
            col0_sum += fields[0] as i64;
        }

        tracing::debug!(
            "Loaded indexed row table: {} rows x {} columns, index on column {} ({} distinct values)",
            num_rows,
            num_cols,
            index_column,
            index.bucket_count()
        );

        Ok(Self {
            shape,
            rows,
            index_column,
            index,
            row_sums,
            col0_sum,
        })
    }

    /// Column the secondary index is built on.
    pub fn index_column(&self) -> usize {
        self.index_column
    }

    /// Rows whose indexed column currently holds `value`.
    pub fn index_bucket(&self, value: i32) -> Option<&[usize]> {
        self.index.bucket(value)
    }

    /// Read-only view of the secondary index.
    pub fn index(&self) -> &SecondaryIndex {
        &self.index
    }

    /// Cached sum of all fields in `row`.
    pub fn row_sum(&self, row: usize) -> Result<i64> {
        validation::check_coordinates(&self.shape, row, 0)?;
        Ok(self.row_sums[row])
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> i32 {
        codec::read_i32(&self.rows, self.shape.offset(row, col))
    }

    /// Writes one field and brings the index and caches up to date.
    ///
    /// Coordinates must already be valid. Writing the current value is a no-op.
    fn write_field(&mut self, row: usize, col: usize, value: i32) {
        let old = self.field(row, col);
        if old == value {
            return;
        }

        let delta = value as i64 - old as i64;
        if col == self.index_column {
            self.index.relocate(old, value, row);
        }
        if col == 0 {
            self.col0_sum += delta;
        }
        self.row_sums[row] += delta;
        codec::write_i32(&mut self.rows, self.shape.offset(row, col), value);
    }

    fn sum_col0_matching(
        &self,
        candidates: impl Iterator<Item = usize>,
        threshold1: i32,
        threshold2: i32,
    ) -> i64 {
        // The index narrows at most one predicate; both are re-checked here.
        candidates
            .filter(|&row| self.field(row, 1) > threshold1 && self.field(row, 2) < threshold2)
            .map(|row| self.field(row, 0) as i64)
            .sum()
    }

    fn update_row(&mut self, row: usize) {
        let value = self.field(row, 3).wrapping_add(self.field(row, 2));
        self.write_field(row, 3, value);
    }

    /// Recomputes the index and caches from the buffer and compares.
    ///
    /// # Errors
    /// [`StoreError::DataCorruption`] describing the first disagreement found.
    pub fn check_integrity(&self) -> Result<()> {
        let mut col0_sum = 0i64;
        for row in 0..self.shape.num_rows {
            let value = self.field(row, self.index_column);
            let in_bucket = self
                .index
                .bucket(value)
                .is_some_and(|rows| rows.contains(&row));
            if !in_bucket {
                return Err(StoreError::DataCorruption(format!(
                    "row {} missing from index bucket {}",
                    row, value
                )));
            }

            let row_sum: i64 = (0..self.shape.num_cols)
                .map(|col| self.field(row, col) as i64)
                .sum();
            if row_sum != self.row_sums[row] {
                return Err(StoreError::DataCorruption(format!(
                    "row {} sum cache {} != {}",
                    row, self.row_sums[row], row_sum
                )));
            }
            col0_sum += self.field(row, 0) as i64;
        }

        let mut members = 0;
        for (value, rows) in self.index.iter() {
            if rows.is_empty() {
                return Err(StoreError::DataCorruption(format!(
                    "empty index bucket {}",
                    value
                )));
            }
            members += rows.len();
        }
        if members != self.shape.num_rows {
            return Err(StoreError::DataCorruption(format!(
                "index holds {} entries for {} rows",
                members, self.shape.num_rows
            )));
        }

        if col0_sum != self.col0_sum {
            return Err(StoreError::DataCorruption(format!(
                "column 0 cache {} != {}",
                self.col0_sum, col0_sum
            )));
        }
        Ok(())
    }
}

impl Table for IndexedRowTable {
    fn num_rows(&self) -> usize {
        self.shape.num_rows
    }

    fn num_cols(&self) -> usize {
        self.shape.num_cols
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        validation::check_coordinates(&self.shape, row, col)?;
        Ok(self.field(row, col))
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        validation::check_coordinates(&self.shape, row, col)?;
        self.write_field(row, col, value);
        Ok(())
    }

    fn column_sum(&self) -> i64 {
        self.col0_sum
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        match self.index_column {
            1 => {
                tracing::trace!("predicated_column_sum: index tail above {}", threshold1);
                self.sum_col0_matching(self.index.rows_above(threshold1), threshold1, threshold2)
            }
            2 => {
                tracing::trace!("predicated_column_sum: index head below {}", threshold2);
                self.sum_col0_matching(self.index.rows_below(threshold2), threshold1, threshold2)
            }
            _ => self.sum_col0_matching(0..self.shape.num_rows, threshold1, threshold2),
        }
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        if self.index_column == 0 {
            tracing::trace!("predicated_all_columns_sum: index tail above {}", threshold);
            return self
                .index
                .rows_above(threshold)
                .map(|row| self.row_sums[row])
                .sum();
        }

        (0..self.shape.num_rows)
            .filter(|&row| self.field(row, 0) > threshold)
            .map(|row| self.row_sums[row])
            .sum()
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        if self.index_column == 0 {
            // Collect first: the writes below borrow the table mutably.
            let candidates: Vec<usize> = self.index.rows_below(threshold).collect();
            tracing::trace!(
                "predicated_update: {} rows from index head below {}",
                candidates.len(),
                threshold
            );
            for &row in &candidates {
                self.update_row(row);
            }
            return candidates.len();
        }

        let mut updated = 0;
        for row in 0..self.shape.num_rows {
            if self.field(row, 0) < threshold {
                self.update_row(row);
                updated += 1;
            }
        }
        updated
    }
}
