//! Table layouts and the query contract they share.

mod any;
mod column;
mod hybrid;
mod index;
mod indexed_row;
mod row;
#[allow(clippy::module_inception)]
mod table;
pub(crate) mod validation;

pub use any::AnyTable;
pub use column::ColumnTable;
pub use hybrid::HybridTable;
pub use index::SecondaryIndex;
pub use indexed_row::IndexedRowTable;
pub use row::RowTable;
pub use table::Table;
pub use validation::QUERY_COLUMNS;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
