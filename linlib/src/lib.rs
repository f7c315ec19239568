//! # linlib
//!
//! Per-file line statistics and project ignore-list management.
//!
//! ## Overview
//!
//! linlib walks directory trees and reports, for every readable text file:
//!
//! - **Lines**: the number of lines
//! - **Max width**: the widest line, in characters
//! - **Avg width**: the mean line width, rounded to two decimals
//!
//! It also maintains a per-project ignore list, `.linignore`, kept next to
//! the `.lininfo` marker that identifies a project root.
//!
//! ## Pipeline
//!
//! - [`source`]: find files under base paths and locate project roots
//! - [`data`]: compute a [`StatRow`] per file and collect them
//! - [`query`]: sort keys and ordering
//! - [`output`]: table-ready, serializable [`StatsTable`]
//! - [`ignore`]: read, extend and shrink `.linignore`
//!
//! ## Example
//!
//! ```rust
//! use linlib::{collect_stats, SortKey, StatusOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "ab\nabcd\n").unwrap();
//! fs::write(dir.path().join("b.txt"), "").unwrap();
//!
//! let rows = collect_stats(
//!     &[dir.path()],
//!     StatusOptions::new().sort(SortKey::Lines).relative(true),
//! );
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].path, "a.txt");
//! assert_eq!(rows[0].lines, 2);
//! assert_eq!(rows[0].max_width, 5);
//! assert_eq!(rows[0].avg_width, 4.0);
//! ```

pub mod data;
pub mod error;
pub mod ignore;
pub mod output;
pub mod query;
pub mod source;

pub use data::{collect_stats, file_stats, StatRow};
pub use error::LinError;
pub use ignore::{add_to_project, remove_from_project, IgnoreFile, IgnoreReport};
pub use output::{StatsTable, TableRow};
pub use query::{SortKey, StatusOptions};
pub use source::{find_project_root, ignore_file_path, IGNORE_FILE, PROJECT_MARKER};

/// Result type for linlib operations
pub type Result<T> = std::result::Result<T, LinError>;
