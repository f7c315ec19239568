//! Output formatting: present data as tables.
//!
//! This module handles the final stage of the pipeline - formatting sorted
//! rows for display. It provides:
//!
//! - **StatsTable**: Table-ready data structure with headers and rows
//! - **TableRow**: Individual row with label and formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use linlib::output::StatsTable;
//!
//! let table = StatsTable::from_rows(&rows);
//! // table.headers: ["Name", "Lines", "Max Width", "Avg Width"]
//! // table.rows: [TableRow { label: "a.txt", values: ["2", "5", "4.00"] }]
//! ```

pub mod table;

pub use table::{StatsTable, TableRow, STATUS_HEADERS};
