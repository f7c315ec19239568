//! Per-file line statistics.
//!
//! A [`StatRow`] summarises one text file:
//!
//! - **lines**: number of lines (always at least 1; empty files have no row)
//! - **max_width**: widest line, in characters
//! - **avg_width**: mean line width, rounded to two decimals
//!
//! Widths count Unicode scalar values and include the line terminator.
//! `\n`, `\r\n` and a lone `\r` all end a line and each count as a single
//! character. A final line without a terminator is still a line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Line statistics for a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    /// Display path (as walked, or relative to the base path)
    pub path: String,
    /// Number of lines
    pub lines: u64,
    /// Maximum line width
    pub max_width: u64,
    /// Average line width, rounded to 2 decimals
    pub avg_width: f64,
}

impl StatRow {
    /// Build a row from per-line widths.
    ///
    /// Returns `None` when there are no lines.
    pub fn from_widths(path: impl Into<String>, widths: &[u64]) -> Option<Self> {
        if widths.is_empty() {
            return None;
        }

        let lines = widths.len() as u64;
        let max_width = widths.iter().copied().max().unwrap_or(0);
        let sum: u64 = widths.iter().sum();

        Some(Self {
            path: path.into(),
            lines,
            max_width,
            avg_width: round2(sum as f64 / lines as f64),
        })
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Width of every line in `content`.
pub fn line_widths(content: &str) -> Vec<u64> {
    let mut widths = Vec::new();
    let mut width = 0u64;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        width += 1;
        match c {
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            _ => continue,
        }
        widths.push(width);
        width = 0;
    }
    if width > 0 {
        widths.push(width);
    }

    widths
}

/// Compute stats for a single file.
///
/// `label` is the path shown in the row; `path` is what gets read. Any read
/// failure (missing file, permissions, invalid UTF-8) and empty files yield
/// `None`.
pub fn file_stats(path: impl AsRef<Path>, label: impl Into<String>) -> Option<StatRow> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable file");
            return None;
        }
    };

    let row = StatRow::from_widths(label, &line_widths(&content));
    if row.is_none() {
        debug!(path = %path.display(), "skipping empty file");
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_line_widths_count_terminator() {
        assert_eq!(line_widths("ab\nabcd\n"), vec![3, 5]);
    }

    #[test]
    fn test_line_widths_unterminated_last_line() {
        assert_eq!(line_widths("abc\nabcde"), vec![4, 5]);
    }

    #[test]
    fn test_line_widths_crlf_counts_once() {
        assert_eq!(line_widths("ab\r\ncd\r\n"), vec![3, 3]);
    }

    #[test]
    fn test_line_widths_lone_carriage_return() {
        assert_eq!(line_widths("ab\rcd\r"), vec![3, 3]);
        assert_eq!(line_widths("ab\rcd"), vec![3, 2]);
    }

    #[test]
    fn test_line_widths_mixed_terminators() {
        assert_eq!(line_widths("a\r\nbb\rccc\n\r"), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_line_widths_counts_chars_not_bytes() {
        // Three two-byte characters plus the newline
        assert_eq!(line_widths("äöü\n"), vec![4]);
    }

    #[test]
    fn test_line_widths_empty() {
        assert!(line_widths("").is_empty());
    }

    #[test]
    fn test_line_widths_blank_lines() {
        assert_eq!(line_widths("\n\n\n"), vec![1, 1, 1]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.0), 4.0);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_from_widths() {
        let row = StatRow::from_widths("a.txt", &[3, 5]).unwrap();

        assert_eq!(row.path, "a.txt");
        assert_eq!(row.lines, 2);
        assert_eq!(row.max_width, 5);
        assert_eq!(row.avg_width, 4.0);
    }

    #[test]
    fn test_from_widths_uniform() {
        let row = StatRow::from_widths("uniform", &[7; 12]).unwrap();

        assert_eq!(row.lines, 12);
        assert_eq!(row.max_width, 7);
        assert_eq!(row.avg_width, 7.0);
    }

    #[test]
    fn test_from_widths_empty() {
        assert!(StatRow::from_widths("empty", &[]).is_none());
    }

    #[test]
    fn test_file_stats() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "ab\nabcd\n").unwrap();

        let row = file_stats(&path, "a.txt").unwrap();

        assert_eq!(
            row,
            StatRow {
                path: "a.txt".to_string(),
                lines: 2,
                max_width: 5,
                avg_width: 4.0,
            }
        );
    }

    #[test]
    fn test_file_stats_uneven_average() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("b.txt");
        fs::write(&path, "a\nab\nabc\n").unwrap();

        let row = file_stats(&path, "b.txt").unwrap();

        // widths 2, 3, 4
        assert_eq!(row.lines, 3);
        assert_eq!(row.max_width, 4);
        assert_eq!(row.avg_width, 3.0);
    }

    #[test]
    fn test_file_stats_old_mac_line_endings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mac.txt");
        fs::write(&path, "ab\rabcd\r").unwrap();

        let row = file_stats(&path, "mac.txt").unwrap();

        assert_eq!(row.lines, 2);
        assert_eq!(row.max_width, 5);
        assert_eq!(row.avg_width, 4.0);
    }

    #[test]
    fn test_file_stats_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(file_stats(&path, "empty.txt").is_none());
    }

    #[test]
    fn test_file_stats_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80, b'\n']).unwrap();

        assert!(file_stats(&path, "blob.bin").is_none());
    }

    #[test]
    fn test_file_stats_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        assert!(file_stats(&path, "missing.txt").is_none());
    }

    #[test]
    fn test_file_stats_directory() {
        let temp = tempdir().unwrap();

        assert!(file_stats(temp.path(), "dir").is_none());
    }
}
