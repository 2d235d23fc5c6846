//! Hybrid table: row-major and column-major copies of the same data.
//!
//! Reads default to the column-major copy, which suits the scan-heavy queries;
//! the predicated update reads its row-local operands from the row-major copy.
//! A per-row sum cache makes the all-columns query O(1) per qualifying row.

use crate::codec::{self, Order, Shape};
use crate::error::{Result, StoreError};
use crate::loader::DataLoader;

use super::table::Table;
use super::validation;

/// Both physical encodings of one logical table, written through one function.
///
/// The two buffers share an index space and length; [`DualBuffer::write`] is
/// the only mutator, so they cannot diverge.
#[derive(Debug, Clone)]
struct DualBuffer {
    row_shape: Shape,
    col_shape: Shape,
    rows: Vec<u8>,
    columns: Vec<u8>,
}

impl DualBuffer {
    fn load(loader: &dyn DataLoader, num_rows: usize, num_cols: usize) -> Self {
        let row_shape = Shape::new(num_rows, num_cols, Order::RowMajor);
        let col_shape = Shape::new(num_rows, num_cols, Order::ColumnMajor);
        Self {
            rows: validation::fill_buffer(loader, &row_shape),
            columns: validation::fill_buffer(loader, &col_shape),
            row_shape,
            col_shape,
        }
    }

    #[inline]
    fn read_column_major(&self, row: usize, col: usize) -> i32 {
        codec::read_i32(&self.columns, self.col_shape.offset(row, col))
    }

    #[inline]
    fn read_row_major(&self, row: usize, col: usize) -> i32 {
        codec::read_i32(&self.rows, self.row_shape.offset(row, col))
    }

    #[inline]
    fn write(&mut self, row: usize, col: usize, value: i32) {
        codec::write_i32(&mut self.rows, self.row_shape.offset(row, col), value);
        codec::write_i32(&mut self.columns, self.col_shape.offset(row, col), value);
    }
}

/// Row+column table with column-0 and per-row sum caches.
#[derive(Debug, Clone)]
pub struct HybridTable {
    data: DualBuffer,
    row_sums: Vec<i64>,
    col0_sum: i64,
}

impl HybridTable {
    /// Populates both buffers and both caches from `loader`.
    ///
    /// # Errors
    /// [`StoreError::Load`] for malformed input.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        let (num_rows, num_cols) = validation::validate_input(loader)?;
        let data = DualBuffer::load(loader, num_rows, num_cols);

        let row_sums: Vec<i64> = loader
            .rows()
            .iter()
            .map(|fields| fields.iter().map(|&v| v as i64).sum())
            .collect();
        let col0_sum = loader.rows().iter().map(|fields| fields[0] as i64).sum();

        tracing::debug!(
            "Loaded hybrid table: {} rows x {} columns",
            num_rows,
            num_cols
        );

        Ok(Self {
            data,
            row_sums,
            col0_sum,
        })
    }

    /// Cached sum of all fields in `row`.
    pub fn row_sum(&self, row: usize) -> Result<i64> {
        validation::check_coordinates(&self.data.row_shape, row, 0)?;
        Ok(self.row_sums[row])
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> i32 {
        self.data.read_column_major(row, col)
    }

    fn write_field(&mut self, row: usize, col: usize, value: i32) {
        let old = self.data.read_row_major(row, col);
        if old == value {
            return;
        }

        let delta = value as i64 - old as i64;
        if col == 0 {
            self.col0_sum += delta;
        }
        self.row_sums[row] += delta;
        self.data.write(row, col, value);
    }

    /// Checks both buffers agree and both caches match a fresh scan.
    ///
    /// # Errors
    /// [`StoreError::DataCorruption`] describing the first disagreement found.
    pub fn check_integrity(&self) -> Result<()> {
        let shape = self.data.row_shape;
        let mut col0_sum = 0i64;
        for row in 0..shape.num_rows {
            let mut row_sum = 0i64;
            for col in 0..shape.num_cols {
                let by_row = self.data.read_row_major(row, col);
                let by_col = self.data.read_column_major(row, col);
                if by_row != by_col {
                    return Err(StoreError::DataCorruption(format!(
                        "field ({}, {}) is {} row-major but {} column-major",
                        row, col, by_row, by_col
                    )));
                }
                row_sum += by_row as i64;
            }
            if row_sum != self.row_sums[row] {
                return Err(StoreError::DataCorruption(format!(
                    "row {} sum cache {} != {}",
                    row, self.row_sums[row], row_sum
                )));
            }
            col0_sum += self.field(row, 0) as i64;
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

impl Table for HybridTable {
    fn num_rows(&self) -> usize {
        self.data.row_shape.num_rows
    }

    fn num_cols(&self) -> usize {
        self.data.row_shape.num_cols
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        validation::check_coordinates(&self.data.col_shape, row, col)?;
        Ok(self.field(row, col))
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        validation::check_coordinates(&self.data.row_shape, row, col)?;
        self.write_field(row, col, value);
        Ok(())
    }

    fn column_sum(&self) -> i64 {
        self.col0_sum
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        let mut sum = 0i64;
        for row in 0..self.num_rows() {
            if self.field(row, 1) > threshold1 && self.field(row, 2) < threshold2 {
                sum += self.field(row, 0) as i64;
            }
        }
        sum
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        (0..self.num_rows())
            .filter(|&row| self.field(row, 0) > threshold)
            .map(|row| self.row_sums[row])
            .sum()
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        let mut updated = 0;
        for row in 0..self.num_rows() {
            if self.field(row, 0) < threshold {
                let col2 = self.data.read_row_major(row, 2);
                let col3 = self.data.read_row_major(row, 3);
                self.write_field(row, 3, col3.wrapping_add(col2));
                updated += 1;
            }
        }
        updated
    }
}
