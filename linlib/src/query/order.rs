//! Ordering of collected stat rows.

use std::cmp::Ordering;

use crate::data::stats::StatRow;

use super::options::SortKey;

/// Sort rows in place by `key`.
///
/// The sort is stable: rows with equal keys keep their incoming order.
pub fn sort_rows(rows: &mut [StatRow], key: SortKey) {
    rows.sort_by(|a, b| compare_rows(a, b, key));
}

/// Compare two rows the way [`sort_rows`] orders them.
pub fn compare_rows(a: &StatRow, b: &StatRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Alphabetical => a.path.cmp(&b.path),
        SortKey::Lines => b.lines.cmp(&a.lines),
        SortKey::Width => b.max_width.cmp(&a.max_width),
    }
}
