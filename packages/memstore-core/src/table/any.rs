//! Closed set of layouts selectable at load time.

use crate::config::{LayoutKind, TableConfig};
use crate::error::Result;
use crate::loader::DataLoader;

use super::column::ColumnTable;
use super::hybrid::HybridTable;
use super::indexed_row::IndexedRowTable;
use super::row::RowTable;
use super::table::Table;

/// One of the four table layouts.
#[derive(Debug, Clone)]
pub enum AnyTable {
    Row(RowTable),
    Column(ColumnTable),
    IndexedRow(IndexedRowTable),
    Hybrid(HybridTable),
}

macro_rules! dispatch {
    ($self:expr, $table:ident => $body:expr) => {
        match $self {
            AnyTable::Row($table) => $body,
            AnyTable::Column($table) => $body,
            AnyTable::IndexedRow($table) => $body,
            AnyTable::Hybrid($table) => $body,
        }
    };
}

impl AnyTable {
    /// Loads `loader` into the layout named by `config`.
    ///
    /// `config.index_column` is only consulted for [`LayoutKind::IndexedRow`].
    pub fn load(config: &TableConfig, loader: &dyn DataLoader) -> Result<Self> {
        Ok(match config.layout {
            LayoutKind::Row => AnyTable::Row(RowTable::load(loader)?),
            LayoutKind::Column => AnyTable::Column(ColumnTable::load(loader)?),
            LayoutKind::IndexedRow => {
                AnyTable::IndexedRow(IndexedRowTable::load(loader, config.index_column)?)
            }
            LayoutKind::Hybrid => AnyTable::Hybrid(HybridTable::load(loader)?),
        })
    }

    /// Layout of this table.
    pub fn kind(&self) -> LayoutKind {
        match self {
            AnyTable::Row(_) => LayoutKind::Row,
            AnyTable::Column(_) => LayoutKind::Column,
            AnyTable::IndexedRow(_) => LayoutKind::IndexedRow,
            AnyTable::Hybrid(_) => LayoutKind::Hybrid,
        }
    }

    /// Runs the layout's integrity check; layouts without derived state always pass.
    pub fn check_integrity(&self) -> Result<()> {
        match self {
            AnyTable::IndexedRow(table) => table.check_integrity(),
            AnyTable::Hybrid(table) => table.check_integrity(),
            AnyTable::Row(_) | AnyTable::Column(_) => Ok(()),
        }
    }
}

impl Table for AnyTable {
    fn num_rows(&self) -> usize {
        dispatch!(self, t => t.num_rows())
    }

    fn num_cols(&self) -> usize {
        dispatch!(self, t => t.num_cols())
    }

    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        dispatch!(self, t => t.get_int_field(row, col))
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        dispatch!(self, t => t.put_int_field(row, col, value))
    }

    fn column_sum(&self) -> i64 {
        dispatch!(self, t => t.column_sum())
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        dispatch!(self, t => t.predicated_column_sum(threshold1, threshold2))
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        dispatch!(self, t => t.predicated_all_columns_sum(threshold))
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        dispatch!(self, t => t.predicated_update(threshold))
    }
}
