//! Validation of load input and field coordinates.

use crate::codec::{Order, Shape};
use crate::error::{LoadError, Result, StoreError};
use crate::loader::DataLoader;

/// Highest column referenced by the hard-wired queries, plus one.
pub const QUERY_COLUMNS: usize = 4;

/// Validates loader output and returns `(num_rows, num_cols)`.
///
/// Checks the column count, every row's width, and that the backing buffer
/// size does not overflow.
pub(crate) fn validate_input(loader: &dyn DataLoader) -> Result<(usize, usize)> {
    let num_cols = loader.num_cols();
    if num_cols < QUERY_COLUMNS {
        return Err(LoadError::TooFewColumns {
            num_cols,
            required: QUERY_COLUMNS,
        }
        .into());
    }

    let rows = loader.rows();
    for (row, fields) in rows.iter().enumerate() {
        if fields.len() != num_cols {
            return Err(LoadError::RowWidthMismatch {
                row,
                expected: num_cols,
                got: fields.len(),
            }
            .into());
        }
    }

    Shape::new(rows.len(), num_cols, Order::RowMajor)
        .byte_len()
        .ok_or(StoreError::CapacityOverflow {
            operation: "table buffer allocation",
        })?;

    Ok((rows.len(), num_cols))
}

/// Copies loader rows into a zeroed buffer laid out by `shape`.
pub(crate) fn fill_buffer(loader: &dyn DataLoader, shape: &Shape) -> Vec<u8> {
    // validate_input has already proven the length fits
    let mut buffer = vec![0u8; shape.byte_len().unwrap_or(0)];
    for (row, fields) in loader.rows().iter().enumerate() {
        for (col, &value) in fields.iter().enumerate() {
            crate::codec::write_i32(&mut buffer, shape.offset(row, col), value);
        }
    }
    buffer
}

/// Fails with [`StoreError::OutOfRange`] unless (`row`, `col`) lies inside `shape`.
#[inline]
pub(crate) fn check_coordinates(shape: &Shape, row: usize, col: usize) -> Result<()> {
    if row >= shape.num_rows || col >= shape.num_cols {
        return Err(StoreError::OutOfRange {
            row,
            col,
            num_rows: shape.num_rows,
            num_cols: shape.num_cols,
        });
    }
    Ok(())
}
