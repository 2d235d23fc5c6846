//! Column-major table.
//!
//! Values of a column are contiguous: `col 0 | col 1 | ... | col m`.

use crate::codec::{self, Order, Shape};
use crate::error::Result;
use crate::loader::DataLoader;

use super::table::Table;
use super::validation;

/// Table stored as one column-major buffer with no auxiliary structures.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    shape: Shape,
    columns: Vec<u8>,
}

impl ColumnTable {
    /// Copies every row from `loader` into a freshly allocated buffer.
    ///
    /// # Errors
    /// [`StoreError::Load`](crate::error::StoreError::Load) for malformed input.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        let (num_rows, num_cols) = validation::validate_input(loader)?;
        let shape = Shape::new(num_rows, num_cols, Order::ColumnMajor);
        let columns = validation::fill_buffer(loader, &shape);

        tracing::debug!(
            "Loaded column table: {} rows x {} columns",
            num_rows,
            num_cols
        );

        Ok(Self { shape, columns })
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> i32 {
        codec::read_i32(&self.columns, self.shape.offset(row, col))
    }

    #[inline]
    fn set_field(&mut self, row: usize, col: usize, value: i32) {
        codec::write_i32(&mut self.columns, self.shape.offset(row, col), value);
    }
}

impl Table for ColumnTable {
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
        let num_rows = self.shape.num_rows;

        // Walk column 0 once to pick rows, then each remaining column in order.
        let mut selected = vec![false; num_rows];
        let mut sum = 0i64;
        for (row, keep) in selected.iter_mut().enumerate() {
            let value = self.field(row, 0);
            if value > threshold {
                *keep = true;
                sum += value as i64;
            }
        }

        for col in 1..self.shape.num_cols {
            for (row, _) in selected.iter().enumerate().filter(|(_, keep)| **keep) {
                sum += self.field(row, col) as i64;
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
