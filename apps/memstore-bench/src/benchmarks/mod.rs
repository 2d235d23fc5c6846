//! Query-mix workloads and their reports.

pub mod compare;
pub mod run;

use std::time::{Duration, Instant};

use memstore_core::{AnyTable, Table};
use serde::Serialize;

use crate::config::BenchConfig;

/// Names of the four operations, in execution order.
pub const QUERY_NAMES: [&str; 4] = [
    "column_sum",
    "predicated_column_sum",
    "predicated_all_columns_sum",
    "predicated_update",
];

/// Latency summary for one operation.
#[derive(Debug, Clone, Serialize)]
pub struct QueryStats {
    pub name: &'static str,
    pub iterations: usize,
    pub mean_micros: f64,
    pub total_micros: f64,
    pub last_result: i64,
}

/// Timing and results of one workload against one table.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    pub layout: String,
    pub rows: usize,
    pub cols: usize,
    pub load_millis: f64,
    pub queries: Vec<QueryStats>,
    /// Per-round results, compared across layouts
    #[serde(skip)]
    pub results: Vec<[i64; 4]>,
}

impl WorkloadReport {
    pub fn print(&self) {
        println!("Layout: {}", self.layout);
        println!("  Rows: {}, Columns: {}", self.rows, self.cols);
        println!("  Load time: {:.3} ms", self.load_millis);
        for query in &self.queries {
            println!(
                "  {:<28} mean {:>12.3} us  total {:>12.3} us  result {}",
                query.name, query.mean_micros, query.total_micros, query.last_result
            );
        }
    }
}

/// Runs `config.iterations` rounds of the four operations against `table`.
///
/// Load time is measured by the caller and passed in; it is not part of any
/// query latency.
pub fn run_workload(
    label: String,
    table: &mut AnyTable,
    config: &BenchConfig,
    load_time: Duration,
) -> WorkloadReport {
    let mut totals = [Duration::ZERO; 4];
    let mut results = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let mut round = [0i64; 4];

        let start = Instant::now();
        round[0] = std::hint::black_box(table.column_sum());
        totals[0] += start.elapsed();

        let start = Instant::now();
        round[1] = std::hint::black_box(
            table.predicated_column_sum(config.threshold1, config.threshold2),
        );
        totals[1] += start.elapsed();

        let start = Instant::now();
        round[2] =
            std::hint::black_box(table.predicated_all_columns_sum(config.all_columns_threshold));
        totals[2] += start.elapsed();

        let start = Instant::now();
        round[3] = std::hint::black_box(table.predicated_update(config.update_threshold)) as i64;
        totals[3] += start.elapsed();

        results.push(round);
    }

    let last = results.last().copied().unwrap_or_default();
    let queries = QUERY_NAMES
        .iter()
        .zip(totals.iter())
        .zip(last.iter())
        .map(|((&name, total), &last_result)| {
            let total_micros = total.as_secs_f64() * 1e6;
            QueryStats {
                name,
                iterations: config.iterations,
                mean_micros: total_micros / config.iterations.max(1) as f64,
                total_micros,
                last_result,
            }
        })
        .collect();

    tracing::debug!("Finished {} rounds on {}", config.iterations, label);

    WorkloadReport {
        layout: label,
        rows: table.num_rows(),
        cols: table.num_cols(),
        load_millis: load_time.as_secs_f64() * 1e3,
        queries,
        results,
    }
}
