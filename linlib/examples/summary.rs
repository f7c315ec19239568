//! Print a one-screen summary of line statistics for a directory.

use linlib::{collect_stats, SortKey, StatusOptions};
use std::env;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let rows = collect_stats(
        &[&path],
        StatusOptions::new().sort(SortKey::Width).relative(true),
    );

    let total_lines: u64 = rows.iter().map(|r| r.lines).sum();
    let widest = rows.first();

    println!("lin summary for {path}");
    println!("=====================");
    println!();
    println!("Files        | {:12}", rows.len());
    println!("Lines        | {:12}", total_lines);
    if let Some(row) = widest {
        println!("Widest line  | {:12} ({})", row.max_width, row.path);
    }
}
