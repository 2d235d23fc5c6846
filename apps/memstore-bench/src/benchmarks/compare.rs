use std::time::Instant;

use memstore_core::table::QUERY_COLUMNS;
use memstore_core::{AnyTable, LayoutKind, TableConfig};

use crate::benchmarks::{run_workload, WorkloadReport, QUERY_NAMES};
use crate::config::BenchConfig;
use crate::utils::load_source;

/// Every layout to compare: the indexed layout once per query column.
fn comparison_configs() -> Vec<TableConfig> {
    let mut configs = Vec::new();
    for layout in LayoutKind::ALL {
        if layout == LayoutKind::IndexedRow {
            configs.extend((0..QUERY_COLUMNS).map(|index_column| TableConfig {
                layout,
                index_column,
            }));
        } else {
            configs.push(TableConfig {
                layout,
                index_column: 0,
            });
        }
    }
    configs
}

/// Returns a description of the first result that differs from `baseline`.
fn first_mismatch(baseline: &WorkloadReport, other: &WorkloadReport) -> Option<String> {
    for (round, (expected, got)) in baseline.results.iter().zip(&other.results).enumerate() {
        for (query, name) in QUERY_NAMES.iter().enumerate() {
            if expected[query] != got[query] {
                return Some(format!(
                    "{} round {}: {} returned {}, {} returned {}",
                    name, round, baseline.layout, expected[query], other.layout, got[query]
                ));
            }
        }
    }
    None
}

/// Runs the query mix on every layout and fails if any result differs.
pub fn run_comparison(config: &BenchConfig) -> anyhow::Result<()> {
    let loader = load_source(config)?;

    let mut reports = Vec::new();
    for table_config in comparison_configs() {
        let start = Instant::now();
        let mut table = AnyTable::load(&table_config, loader.as_ref())?;
        let load_time = start.elapsed();

        let label = match table_config.layout {
            LayoutKind::IndexedRow => format!("indexed-row[c{}]", table_config.index_column),
            other => other.to_string(),
        };
        let report = run_workload(label, &mut table, config, load_time);
        table.check_integrity()?;
        report.print();
        reports.push(report);
    }

    let Some((baseline, others)) = reports.split_first() else {
        return Ok(());
    };
    for report in others {
        if let Some(mismatch) = first_mismatch(baseline, report) {
            tracing::error!("Layouts disagree: {}", mismatch);
            anyhow::bail!("layouts disagree: {}", mismatch);
        }
    }

    println!("All {} layouts agree on every query.", reports.len());
    Ok(())
}
