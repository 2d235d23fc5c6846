//! Fixed-width field codec.
//!
//! Every field is a 4-byte signed integer stored little-endian. Offsets are
//! computed from a (row, col) coordinate and the buffer's [`Order`]. The codec
//! trusts its callers: coordinates are validated by the public table
//! operations, not here.

/// Size of one encoded field in bytes.
pub const FIELD_LEN: usize = std::mem::size_of::<i32>();

/// Arrangement of fields inside a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `row 0 | row 1 | ... | row n`
    RowMajor,
    /// `col 0 | col 1 | ... | col m`
    ColumnMajor,
}

/// Shape of a flat buffer: dimensions plus field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub num_rows: usize,
    pub num_cols: usize,
    pub order: Order,
}

impl Shape {
    pub fn new(num_rows: usize, num_cols: usize, order: Order) -> Self {
        Self {
            num_rows,
            num_cols,
            order,
        }
    }

    /// Byte offset of field (`row`, `col`).
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        let slot = match self.order {
            Order::RowMajor => row * self.num_cols + col,
            Order::ColumnMajor => col * self.num_rows + row,
        };
        FIELD_LEN * slot
    }

    /// Total buffer length in bytes, or `None` on overflow.
    pub fn byte_len(&self) -> Option<usize> {
        self.num_rows
            .checked_mul(self.num_cols)
            .and_then(|fields| fields.checked_mul(FIELD_LEN))
    }
}

/// Reads the field starting at byte `offset`.
#[inline]
pub fn read_i32(buf: &[u8], offset: usize) -> i32 {
    let mut bytes = [0u8; FIELD_LEN];
    bytes.copy_from_slice(&buf[offset..offset + FIELD_LEN]);
    i32::from_le_bytes(bytes)
}

/// Writes `value` as the field starting at byte `offset`.
#[inline]
pub fn write_i32(buf: &mut [u8], offset: usize, value: i32) {
    buf[offset..offset + FIELD_LEN].copy_from_slice(&value.to_le_bytes());
}
