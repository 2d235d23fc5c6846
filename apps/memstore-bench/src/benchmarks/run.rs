use std::time::Instant;

use anyhow::Context;
use memstore_core::{AnyTable, LayoutKind};

use crate::benchmarks::run_workload;
use crate::config::BenchConfig;
use crate::utils::load_source;

/// Loads the configured layout and times the query mix against it.
pub fn run_single_layout(config: &BenchConfig, json: bool) -> anyhow::Result<()> {
    let loader = load_source(config)?;

    let start = Instant::now();
    let mut table = AnyTable::load(&config.table, loader.as_ref())
        .with_context(|| format!("failed to load {} table", config.table.layout))?;
    let load_time = start.elapsed();
    tracing::info!("Loaded {} table in {:?}", config.table.layout, load_time);

    let label = match config.table.layout {
        LayoutKind::IndexedRow => format!(
            "{} (index on column {})",
            LayoutKind::IndexedRow,
            config.table.index_column
        ),
        other => other.to_string(),
    };
    let report = run_workload(label, &mut table, config, load_time);
    table.check_integrity()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
