//! In-memory fixed-schema table storage.
//!
//! Provides four interchangeable physical layouts (row-major, column-major,
//! indexed row-major and hybrid row+column) answering the same fixed set of
//! analytic queries and a predicated update.

pub mod codec;
pub mod config;
pub mod error;
pub mod loader;
pub mod table;

pub use config::{LayoutKind, TableConfig};
pub use error::{LoadError, Result, StoreError};
pub use loader::{CsvLoader, DataLoader, RowsLoader};
pub use table::{AnyTable, ColumnTable, HybridTable, IndexedRowTable, RowTable, Table};
