//! Config-driven smoke tests.

use ntest::timeout;

use memstore_core::{AnyTable, LayoutKind, RowsLoader, StoreError, Table, TableConfig};

#[timeout(5000)]
#[test]
fn test_config_from_json_builds_layout() {
    let config: TableConfig =
        serde_json::from_str(r#"{"layout":"indexed-row","index_column":1}"#).unwrap();
    let loader = RowsLoader::new(5, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10]]);

    let table = AnyTable::load(&config, &loader).unwrap();
    match &table {
        AnyTable::IndexedRow(indexed) => {
            assert_eq!(indexed.index_column(), 1);
            assert_eq!(indexed.index_bucket(7), Some(&[1usize][..]));
        }
        other => panic!("expected indexed layout, got {}", other.kind()),
    }
    assert_eq!(table.predicated_column_sum(2, 100), 6);
    assert_eq!(table.predicated_all_columns_sum(0), 55);
}

#[timeout(5000)]
#[test]
fn test_index_column_ignored_by_other_layouts() {
    let loader = RowsLoader::new(4, vec![vec![1, 1, 1, 1]]);
    for layout in [LayoutKind::Row, LayoutKind::Column, LayoutKind::Hybrid] {
        let config = TableConfig {
            layout,
            index_column: 99,
        };
        assert!(AnyTable::load(&config, &loader).is_ok(), "{}", layout);
    }

    let config = TableConfig {
        layout: LayoutKind::IndexedRow,
        index_column: 99,
    };
    assert!(matches!(
        AnyTable::load(&config, &loader),
        Err(StoreError::Load(_))
    ));
}
