//! Table configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical layout of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Row-major buffer, full scans
    Row,
    /// Column-major buffer, full scans
    Column,
    /// Row-major buffer with an ordered secondary index and running caches
    IndexedRow,
    /// Row-major and column-major buffers kept in sync, with running caches
    Hybrid,
}

impl LayoutKind {
    /// All layouts in a stable order.
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Row,
        LayoutKind::Column,
        LayoutKind::IndexedRow,
        LayoutKind::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Row => "row",
            LayoutKind::Column => "column",
            LayoutKind::IndexedRow => "indexed-row",
            LayoutKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(LayoutKind::Row),
            "column" => Ok(LayoutKind::Column),
            "indexed-row" | "indexed" => Ok(LayoutKind::IndexedRow),
            "hybrid" | "custom" => Ok(LayoutKind::Hybrid),
            other => Err(format!(
                "unknown layout '{}' (expected row, column, indexed-row or hybrid)",
                other
            )),
        }
    }
}

/// Table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Physical layout to build
    pub layout: LayoutKind,
    /// Column carrying the secondary index (indexed-row layout only)
    pub index_column: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Row,
            index_column: 0,
        }
    }
}
