//! End-to-end workload tests.
//!
//! Loads the same rows into every layout, runs an identical sequence of
//! queries and updates against each, and checks the answers never diverge.

use ntest::timeout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use memstore_core::{
    AnyTable, ColumnTable, HybridTable, IndexedRowTable, RowTable, RowsLoader, Table,
};

fn generate_rows(seed: u64, num_rows: usize, num_cols: usize, max_value: i32) -> RowsLoader {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<i32>> = (0..num_rows)
        .map(|_| (0..num_cols).map(|_| rng.gen_range(0..max_value)).collect())
        .collect();
    RowsLoader::new(num_cols, rows)
}

fn build_all(loader: &RowsLoader) -> Vec<AnyTable> {
    let mut tables = vec![
        AnyTable::Row(RowTable::load(loader).unwrap()),
        AnyTable::Column(ColumnTable::load(loader).unwrap()),
        AnyTable::Hybrid(HybridTable::load(loader).unwrap()),
    ];
    for index_column in 0..4 {
        tables.push(AnyTable::IndexedRow(
            IndexedRowTable::load(loader, index_column).unwrap(),
        ));
    }
    tables
}

/// Results of one round of the four operations on a table.
#[derive(Debug, PartialEq, Eq)]
struct Round {
    column_sum: i64,
    predicated_column_sum: i64,
    predicated_all_columns_sum: i64,
    updated: usize,
}

fn run_round(table: &mut AnyTable, t1: i32, t2: i32, t: i32) -> Round {
    Round {
        column_sum: table.column_sum(),
        predicated_column_sum: table.predicated_column_sum(t1, t2),
        predicated_all_columns_sum: table.predicated_all_columns_sum(t),
        updated: table.predicated_update(t),
    }
}

#[timeout(10000)]
#[test]
fn test_layouts_return_identical_results() {
    let loader = generate_rows(99, 2_000, 8, 1_000);
    let mut tables = build_all(&loader);
    let mut rng = StdRng::seed_from_u64(5);

    for round in 0..20 {
        let t1 = rng.gen_range(0..1_000);
        let t2 = rng.gen_range(0..1_000);
        let t = rng.gen_range(0..1_000);

        let results: Vec<Round> = tables
            .iter_mut()
            .map(|table| run_round(table, t1, t2, t))
            .collect();
        for (table, result) in tables.iter().zip(&results).skip(1) {
            assert_eq!(result, &results[0], "round {} layout {}", round, table.kind());
        }
    }

    for table in &tables {
        table.check_integrity().unwrap();
    }
}

#[timeout(10000)]
#[test]
fn test_column_sum_tracks_point_updates() {
    let loader = generate_rows(3, 500, 4, 100);
    let mut tables = build_all(&loader);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1_000 {
        let row = rng.gen_range(0..500);
        let value = rng.gen_range(-100..100);
        for table in tables.iter_mut() {
            table.put_int_field(row, 0, value).unwrap();
        }
    }

    for table in &tables {
        let scanned: i64 = (0..table.num_rows())
            .map(|row| table.get_int_field(row, 0).unwrap() as i64)
            .sum();
        assert_eq!(table.column_sum(), scanned, "{}", table.kind());
        table.check_integrity().unwrap();
    }
}

#[timeout(5000)]
#[test]
fn test_repeated_updates_accumulate() {
    // col3 += col2 three times on rows with col0 < 15
    let loader = RowsLoader::new(
        4,
        vec![vec![10, 1, 5, 2], vec![20, 9, 1, 3], vec![5, 0, 0, 0]],
    );
    for mut table in build_all(&loader) {
        for _ in 0..3 {
            assert_eq!(table.predicated_update(15), 2);
        }
        assert_eq!(table.get_int_field(0, 3).unwrap(), 17, "{}", table.kind());
        assert_eq!(table.predicated_all_columns_sum(8), 66, "{}", table.kind());
        table.check_integrity().unwrap();
    }
}
