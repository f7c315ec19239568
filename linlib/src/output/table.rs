//! Table-ready data structures for stats output.
//!
//! The data flow is:
//! 1. Raw rows (`StatRow`, already sorted)
//! 2. `StatsTable` (formatted strings for display)
//!
//! `StatsTable` is a pure presentation layer: it formats values, it never
//! filters or sorts.

use serde::{Deserialize, Serialize};

use crate::data::stats::StatRow;

/// Column headers of the status table.
pub const STATUS_HEADERS: [&str; 4] = ["Name", "Lines", "Max Width", "Avg Width"];

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file path)
    pub label: String,
    /// Values for each numeric column, ready for display
    pub values: Vec<String>,
}

/// Table-ready stats data.
///
/// Renderers iterate over headers and rows and only handle layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    /// Column headers: [label_header, value headers...]
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
}

impl StatsTable {
    /// Create a table from sorted stat rows.
    pub fn from_rows(rows: &[StatRow]) -> Self {
        StatsTable {
            headers: STATUS_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| TableRow {
                    label: row.path.clone(),
                    values: format_row(row),
                })
                .collect(),
        }
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format the numeric fields of a row.
fn format_row(row: &StatRow) -> Vec<String> {
    vec![
        row.lines.to_string(),
        row.max_width.to_string(),
        format!("{:.2}", row.avg_width),
    ]
}
