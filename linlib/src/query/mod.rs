//! Query processing: options and ordering of collected rows.
//!
//! - **Options**: sort key and status options (`SortKey`, `StatusOptions`)
//! - **Ordering**: stable sort of stat rows by the chosen key

pub mod options;
pub mod order;

pub use options::{SortKey, StatusOptions};
pub use order::{compare_rows, sort_rows};
