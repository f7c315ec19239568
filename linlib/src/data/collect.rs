//! Tree aggregation: stats for every file under one or more base paths.

use std::path::Path;

use tracing::{debug, warn};

use crate::data::stats::{file_stats, StatRow};
use crate::query::options::StatusOptions;
use crate::query::order::sort_rows;
use crate::source::walk::discover_files;

/// Collect stats for every readable, non-empty file under `base_paths`.
///
/// Rows from each base path are concatenated in the order the base paths are
/// given, then sorted by `options.sort`. Missing base paths contribute no rows.
///
/// # Example
///
/// ```rust,ignore
/// use linlib::{collect_stats, SortKey, StatusOptions};
///
/// let rows = collect_stats(&["src", "tests"], StatusOptions::new().sort(SortKey::Width));
/// for row in &rows {
///     println!("{} {} {}", row.path, row.lines, row.max_width);
/// }
/// ```
pub fn collect_stats<P: AsRef<Path>>(base_paths: &[P], options: StatusOptions) -> Vec<StatRow> {
    let mut rows = Vec::new();

    for base in base_paths {
        let base: &Path = base.as_ref();
        if !base.exists() {
            warn!(path = %base.display(), "base path does not exist, skipping");
            continue;
        }
        rows.extend(collect_base(base, options.relative));
    }

    sort_rows(&mut rows, options.sort);
    rows
}

/// Collect unsorted rows for a single base path.
fn collect_base(base: &Path, relative: bool) -> Vec<StatRow> {
    let files = discover_files(base);
    debug!(base = %base.display(), files = files.len(), "discovered files");

    files
        .iter()
        .filter_map(|file| {
            let label = if relative {
                relative_label(file, base)
            } else {
                file.to_string_lossy().to_string()
            };
            file_stats(file, label)
        })
        .collect()
}

/// Label for `path` relative to `base`.
///
/// A base path that is itself a file is labelled by its file name.
fn relative_label(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if rel.as_os_str().is_empty() => path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string()),
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => path.to_string_lossy().to_string(),
    }
}
