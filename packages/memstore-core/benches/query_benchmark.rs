//! Query latency benchmarks across table layouts.
//!
//! Each read-only query runs against every layout loaded from the same
//! randomly generated rows.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use memstore_core::{AnyTable, LayoutKind, RowsLoader, Table, TableConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const NUM_ROWS: usize = 100_000;
const NUM_COLS: usize = 16;
const MAX_VALUE: i32 = 1_024;

/// Generates a table's worth of uniformly random rows.
fn generate_loader() -> RowsLoader {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let rows: Vec<Vec<i32>> = (0..NUM_ROWS)
        .map(|_| (0..NUM_COLS).map(|_| rng.gen_range(0..MAX_VALUE)).collect())
        .collect();
    RowsLoader::new(NUM_COLS, rows)
}

/// Every layout, with indexed variants on the two predicate columns of the range query.
fn layouts(loader: &RowsLoader) -> Vec<(String, AnyTable)> {
    let mut tables = Vec::new();
    for layout in LayoutKind::ALL {
        let index_columns: &[usize] = if layout == LayoutKind::IndexedRow {
            &[0, 1, 2]
        } else {
            &[0]
        };
        for &index_column in index_columns {
            let config = TableConfig {
                layout,
                index_column,
            };
            let label = if layout == LayoutKind::IndexedRow {
                format!("{}-c{}", layout, index_column)
            } else {
                layout.to_string()
            };
            tables.push((label, AnyTable::load(&config, loader).unwrap()));
        }
    }
    tables
}

fn benchmark_column_sum(c: &mut Criterion) {
    let loader = generate_loader();
    let tables = layouts(&loader);

    let mut group = c.benchmark_group("column_sum");
    for (label, table) in &tables {
        group.bench_with_input(BenchmarkId::from_parameter(label), table, |b, table| {
            b.iter(|| black_box(table.column_sum()))
        });
    }
    group.finish();
}

fn benchmark_predicated_column_sum(c: &mut Criterion) {
    let loader = generate_loader();
    let tables = layouts(&loader);

    let mut group = c.benchmark_group("predicated_column_sum");
    // Selective on col1, loose on col2
    let (t1, t2) = (MAX_VALUE - MAX_VALUE / 20, MAX_VALUE / 2);
    for (label, table) in &tables {
        group.bench_with_input(BenchmarkId::from_parameter(label), table, |b, table| {
            b.iter(|| black_box(table.predicated_column_sum(black_box(t1), black_box(t2))))
        });
    }
    group.finish();
}

fn benchmark_predicated_all_columns_sum(c: &mut Criterion) {
    let loader = generate_loader();
    let tables = layouts(&loader);

    let mut group = c.benchmark_group("predicated_all_columns_sum");
    let threshold = MAX_VALUE / 2;
    for (label, table) in &tables {
        group.bench_with_input(BenchmarkId::from_parameter(label), table, |b, table| {
            b.iter(|| black_box(table.predicated_all_columns_sum(black_box(threshold))))
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(30)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    targets =
        benchmark_column_sum,
        benchmark_predicated_column_sum,
        benchmark_predicated_all_columns_sum
);

criterion_main!(benches);
