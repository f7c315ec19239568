//! Input options for collecting and ordering stats.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LinError;

/// Field to order stat rows by.
///
/// `Alphabetical` sorts ascending by path; `Lines` and `Width` sort
/// descending so the biggest files come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Order by path (lexicographical, ascending)
    Alphabetical,
    /// Order by line count (descending)
    #[default]
    Lines,
    /// Order by maximum line width (descending)
    Width,
}

impl SortKey {
    /// Single-letter code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Alphabetical => "A",
            SortKey::Lines => "L",
            SortKey::Width => "W",
        }
    }
}

impl FromStr for SortKey {
    type Err = LinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "alphabetical" | "name" => Ok(SortKey::Alphabetical),
            "l" | "lines" => Ok(SortKey::Lines),
            "w" | "width" => Ok(SortKey::Width),
            _ => Err(LinError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Options for the status report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOptions {
    /// Field to sort rows by
    pub sort: SortKey,
    /// Show paths relative to their base path
    pub relative: bool,
}

impl StatusOptions {
    /// Create new default options (sort by lines, full paths).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort key.
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Show paths relative to each base path.
    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_default() {
        assert_eq!(SortKey::default(), SortKey::Lines);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("A").unwrap(), SortKey::Alphabetical);
        assert_eq!(SortKey::from_str("l").unwrap(), SortKey::Lines);
        assert_eq!(SortKey::from_str("W").unwrap(), SortKey::Width);
        assert_eq!(SortKey::from_str("width").unwrap(), SortKey::Width);
        assert!(matches!(
            SortKey::from_str("x"),
            Err(LinError::InvalidSortKey(s)) if s == "x"
        ));
    }

    #[test]
    fn test_sort_key_code_round_trips() {
        for key in [SortKey::Alphabetical, SortKey::Lines, SortKey::Width] {
            assert_eq!(SortKey::from_str(key.code()).unwrap(), key);
        }
    }

    #[test]
    fn test_status_options_builder() {
        let options = StatusOptions::new().sort(SortKey::Width).relative(true);
        assert_eq!(options.sort, SortKey::Width);
        assert!(options.relative);

        let defaults = StatusOptions::new();
        assert_eq!(defaults.sort, SortKey::Lines);
        assert!(!defaults.relative);
    }
}
