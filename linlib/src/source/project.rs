//! Project root discovery.
//!
//! A project root is the nearest directory, starting at a given path and
//! moving up through its ancestors, that holds a `.lininfo` marker file. The
//! search stops once the home directory has been checked.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Name of the marker file that identifies a project root.
pub const PROJECT_MARKER: &str = ".lininfo";

/// Name of the ignore file kept in a project root.
pub const IGNORE_FILE: &str = ".linignore";

/// Find the project root for `start`.
///
/// Each ancestor of `start` (inclusive) is checked for a `.lininfo` entry:
/// - a regular file there makes that directory the root;
/// - anything else by that name (a directory, say) ends the search with `None`;
/// - the home directory is the last directory checked.
///
/// Only path manipulation and metadata lookups are used; the process working
/// directory is never touched.
pub fn find_project_root(start: impl AsRef<Path>, home: Option<&Path>) -> Option<PathBuf> {
    for dir in start.as_ref().ancestors() {
        let marker = dir.join(PROJECT_MARKER);

        if let Ok(metadata) = marker.metadata() {
            if metadata.is_file() {
                debug!(root = %dir.display(), "found project root");
                return Some(dir.to_path_buf());
            }
            debug!(path = %marker.display(), "project marker is not a regular file");
            return None;
        }

        if home.is_some_and(|h| h == dir) {
            break;
        }
    }

    None
}

/// Path of the ignore file for a project root.
pub fn ignore_file_path(root: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join(IGNORE_FILE)
}

/// Check if a directory is a project root.
pub fn is_project_root(path: impl AsRef<Path>) -> bool {
    path.as_ref().join(PROJECT_MARKER).is_file()
}
