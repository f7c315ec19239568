//! Recursive file discovery under a base path.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Discover every regular file under `root`.
///
/// Entries are visited depth-first with siblings in file name order, so the
/// result is deterministic for a given tree. A root that is itself a file
/// yields just that file; a missing root yields nothing.
pub fn discover_files(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let root = root.as_ref();

    if !root.exists() {
        debug!(path = %root.display(), "base path does not exist");
        return Vec::new();
    }

    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        // Symlinks are not descended into, but a link to a file still counts
        let path = entry.path();
        if path.is_file() {
            files.push(path.to_path_buf());
        }
    }

    files
}
