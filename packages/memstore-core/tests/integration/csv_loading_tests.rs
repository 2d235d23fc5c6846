//! CSV ingestion tests.

use std::fs;

use ntest::timeout;
use tempfile::tempdir;

use memstore_core::{
    AnyTable, CsvLoader, DataLoader, LayoutKind, LoadError, StoreError, Table, TableConfig,
};

#[timeout(5000)]
#[test]
fn test_csv_file_loads_into_every_layout() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("rows.csv");
    fs::write(&path, "10,1,5,2\n20,9,1,3\n5,0,0,0\n").unwrap();

    let loader = CsvLoader::from_path(&path).unwrap();
    assert_eq!(loader.num_cols(), 4);

    for layout in LayoutKind::ALL {
        let config = TableConfig {
            layout,
            index_column: 2,
        };
        let mut table = AnyTable::load(&config, &loader).unwrap();
        assert_eq!(table.kind(), layout);
        assert_eq!(table.column_sum(), 35);
        assert_eq!(table.predicated_column_sum(0, 10), 30);
        assert_eq!(table.predicated_all_columns_sum(8), 51);
        assert_eq!(table.predicated_update(15), 2);
        assert_eq!(table.get_int_field(0, 3).unwrap(), 7);
    }
}

#[timeout(5000)]
#[test]
fn test_missing_file_is_load_error() {
    let temp_dir = tempdir().unwrap();
    let err = CsvLoader::from_path(temp_dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[timeout(5000)]
#[test]
fn test_narrow_csv_rejected_at_table_load() {
    let loader = CsvLoader::from_reader("1,2\n3,4\n".as_bytes()).unwrap();
    let err = AnyTable::load(&TableConfig::default(), &loader).unwrap_err();
    assert_eq!(
        err,
        StoreError::Load(LoadError::TooFewColumns {
            num_cols: 2,
            required: 4
        })
    );
}
