//! Data collection: read files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading text files
//! and computing line statistics. It provides:
//!
//! - **Statistics**: the per-file `StatRow` and the collector for one file
//! - **Collection**: stats for every file under a set of base paths
//!
//! ## Example
//!
//! ```rust,ignore
//! use linlib::data::{collect_stats, file_stats};
//! use linlib::StatusOptions;
//!
//! let row = file_stats("src/lib.rs", "lib.rs");
//! let rows = collect_stats(&["."], StatusOptions::new());
//! ```

pub mod collect;
pub mod stats;

pub use collect::collect_stats;
pub use stats::{file_stats, line_widths, round2, StatRow};
