//! Project ignore list management.
//!
//! The ignore file (`.linignore`) lives in the project root and holds one
//! path pattern per line. Blank lines and lines starting with `#` are not
//! entries, but they are kept verbatim whenever the file is rewritten:
//!
//! ```text
//! target/
//!
//! # generated
//! build/
//! dist/
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::LinError;
use crate::source::project::ignore_file_path;
use crate::Result;

/// Whether a raw ignore-file line is an entry (not blank, not a comment).
pub fn is_entry(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with('#')
}

/// Whether `path` reads back as the same single entry once written.
fn is_storable(path: &str) -> bool {
    is_entry(path) && !path.contains(['\n', '\r'])
}

/// An ignore file loaded into memory as raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreFile {
    path: PathBuf,
    lines: Vec<String>,
    existed: bool,
}

impl IgnoreFile {
    /// Load the ignore file at `path`.
    ///
    /// A missing file loads as empty; any other read failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Self {
                lines: content.lines().map(str::to_string).collect(),
                path,
                existed: true,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "ignore file not found, starting empty");
                Ok(Self {
                    path,
                    lines: Vec::new(),
                    existed: false,
                })
            }
            Err(source) => Err(LinError::IgnoreRead { path, source }),
        }
    }

    /// Location of the file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed when it was loaded.
    pub fn existed(&self) -> bool {
        self.existed
    }

    /// All raw lines, comments and blanks included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Entry lines, in file order.
    pub fn entries(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| is_entry(line))
            .cloned()
            .collect()
    }

    /// Whether `entry` is already listed.
    pub fn contains(&self, entry: &str) -> bool {
        self.lines.iter().any(|line| is_entry(line) && line == entry)
    }

    /// Append the requested paths that are not yet listed.
    ///
    /// Blank paths, comments and paths spanning several lines are never
    /// added. When anything is added and a title is given, a blank line and a
    /// `# <title>` comment go in first. Returns the added paths; an empty
    /// result means nothing changed.
    pub fn add<S: AsRef<str>>(&mut self, paths: &[S], title: Option<&str>) -> Vec<String> {
        let mut added: Vec<String> = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !is_storable(path) {
                debug!(path, "not a valid ignore entry, skipping");
                continue;
            }
            if !self.contains(path) && !added.iter().any(|a| a == path) {
                added.push(path.to_string());
            }
        }

        if added.is_empty() {
            return added;
        }

        if let Some(title) = title {
            self.lines.push(String::new());
            self.lines.push(format!("# {title}"));
        }
        self.lines.extend(added.iter().cloned());

        added
    }

    /// Drop every entry line equal to one of `paths`.
    ///
    /// Comments and blank lines are left in place. Returns the removed
    /// paths in request order.
    pub fn remove<S: AsRef<str>>(&mut self, paths: &[S]) -> Vec<String> {
        let mut removed: Vec<String> = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if self.contains(path) && !removed.iter().any(|r| r == path) {
                removed.push(path.to_string());
            }
        }

        self.lines
            .retain(|line| !(is_entry(line) && removed.iter().any(|r| r == line)));

        removed
    }

    /// Render the file contents, one line per raw line.
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Overwrite the file on disk, creating it if needed.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.render()).map_err(|source| LinError::IgnoreWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), lines = self.lines.len(), "wrote ignore file");
        Ok(())
    }
}

/// Outcome of an add or remove on a project's ignore file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreReport {
    /// Project root holding the ignore file
    pub root: PathBuf,
    /// Whether the ignore file existed before the operation
    pub file_existed: bool,
    /// Entries listed before the operation
    pub ignored: Vec<String>,
    /// Entries added or removed
    pub changed: Vec<String>,
    /// Requested paths that needed no change
    pub skipped: Vec<String>,
}

impl IgnoreReport {
    /// Whether the ignore file was rewritten.
    pub fn is_changed(&self) -> bool {
        !self.changed.is_empty()
    }
}

fn skipped<S: AsRef<str>>(paths: &[S], changed: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.as_ref().to_string())
        .filter(|p| !changed.contains(p))
        .collect()
}

/// Add paths to the ignore file of the project at `root`.
///
/// The file is only written when at least one path is new, so repeating the
/// same call leaves it untouched.
pub fn add_to_project<S: AsRef<str>>(
    root: impl AsRef<Path>,
    paths: &[S],
    title: Option<&str>,
) -> Result<IgnoreReport> {
    let root = root.as_ref();
    let mut file = IgnoreFile::load(ignore_file_path(root))?;
    let ignored = file.entries();

    let changed = file.add(paths, title);
    if !changed.is_empty() {
        file.save()?;
    }

    Ok(IgnoreReport {
        root: root.to_path_buf(),
        file_existed: file.existed(),
        ignored,
        skipped: skipped(paths, &changed),
        changed,
    })
}

/// Remove paths from the ignore file of the project at `root`.
///
/// The file is only written when at least one entry was removed.
pub fn remove_from_project<S: AsRef<str>>(
    root: impl AsRef<Path>,
    paths: &[S],
) -> Result<IgnoreReport> {
    let root = root.as_ref();
    let mut file = IgnoreFile::load(ignore_file_path(root))?;
    let ignored = file.entries();

    let changed = file.remove(paths);
    if !changed.is_empty() {
        file.save()?;
    }

    Ok(IgnoreReport {
        root: root.to_path_buf(),
        file_existed: file.existed(),
        ignored,
        skipped: skipped(paths, &changed),
        changed,
    })
}
