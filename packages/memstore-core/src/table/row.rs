//! Row-major table.
//!
//! Fields of a row are contiguous: `row 0 | row 1 | ... | row n`.

use crate::codec::{self, Order, Shape};
use crate::error::Result;
use crate::loader::DataLoader;

use super::table::Table;
use super::validation;

/// Table stored as one row-major buffer with no auxiliary structures.
#[derive(Debug, Clone)]
pub struct RowTable {
    shape: Shape,
    rows: Vec<u8>,
}

impl RowTable {
    /// Copies every row from `loader` into a freshly allocated buffer.
    ///
    /// # Errors
    /// [`StoreError::Load`](crate::error::StoreError::Load) for malformed input.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        let (num_rows, num_cols) = validation::validate_input(loader)?;
        let shape = Shape::new(num_rows, num_cols, Order::RowMajor);
        let rows = validation::fill_buffer(loader, &shape);

        tracing::debug!("Loaded row table: {} rows x {} columns", num_rows, num_cols);

        Ok(Self { shape, rows })
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> i32 {
        codec::read_i32(&self.rows, self.shape.offset(row, col))
    }

    #[inline]
    fn set_field(&mut self, row: usize, col: usize, value: i32) {
        codec::write_i32(&mut self.rows, self.shape.offset(row, col), value);
    }
}

impl Table for RowTable {
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
        self.set_field(row, col, value);
        Ok(())
    }

    fn column_sum(&self) -> i64 {
        (0..self.shape.num_rows)
            .map(|row| self.field(row, 0) as i64)
            .sum()
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        let mut sum = 0i64;
        for row in 0..self.shape.num_rows {
            if self.field(row, 1) > threshold1 && self.field(row, 2) < threshold2 {
                sum += self.field(row, 0) as i64;
            }
        }
        sum
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        let mut sum = 0i64;
        for row in 0..self.shape.num_rows {
            if self.field(row, 0) > threshold {
                sum += (0..self.shape.num_cols)
                    .map(|col| self.field(row, col) as i64)
                    .sum::<i64>();
            }
        }
        sum
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        let mut updated = 0;
        for row in 0..self.shape.num_rows {
            if self.field(row, 0) < threshold {
                let value = self.field(row, 3).wrapping_add(self.field(row, 2));
                self.set_field(row, 3, value);
                updated += 1;
            }
        }
        updated
    }
}
