//! Plain-text rendering for CLI output

use console::{measure_text_width, Style};
use linlib::{IgnoreReport, StatsTable};

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

/// Styles applied to rendered output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the header row
    pub header: Style,
}

impl Theme {
    /// Theme used on the terminal
    pub fn styled() -> Self {
        Self {
            header: Style::new().bold(),
        }
    }

    /// Theme without any styling
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
        }
    }
}

/// Pad `text` to `width` display columns.
fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(measure_text_width(text)));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

/// Render a stats table.
///
/// The first column is left-aligned, value columns are right-aligned, and a
/// dashed rule separates the header from the rows. An empty table renders
/// its header only.
pub fn render_table(table: &StatsTable, theme: &Theme) -> String {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| measure_text_width(h))
        .collect();

    for row in &table.rows {
        if let Some(w) = widths.first_mut() {
            *w = (*w).max(measure_text_width(&row.label));
        }
        for (i, value) in row.values.iter().enumerate() {
            if let Some(w) = widths.get_mut(i + 1) {
                *w = (*w).max(measure_text_width(value));
            }
        }
    }

    let mut lines = Vec::with_capacity(table.rows.len() + 2);

    let header = table
        .headers
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (h, &w))| theme.header.apply_to(pad(h, w, i > 0)).to_string())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    lines.push(header);

    let rule = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    lines.push(rule);

    for row in &table.rows {
        let mut cells = Vec::with_capacity(widths.len());
        cells.push(pad(&row.label, widths[0], false));
        for (value, &w) in row.values.iter().zip(widths.iter().skip(1)) {
            cells.push(pad(value, w, true));
        }
        lines.push(cells.join(COLUMN_GAP).trim_end().to_string());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Format a list of entries the way the reports show them.
fn format_list(items: &[String]) -> String {
    format!("{items:?}")
}

/// Render the outcome of an ignore-add.
pub fn render_add_report(report: &IgnoreReport) -> String {
    format!(
        "base path: {}\nignored: {}\nto ignore: {}\n",
        report.root.display(),
        format_list(&report.ignored),
        format_list(&report.changed),
    )
}

/// Render the outcome of an ignore-remove.
pub fn render_remove_report(report: &IgnoreReport) -> String {
    format!(
        "base path: {}\nremoved: {}\nnot found: {}\n",
        report.root.display(),
        format_list(&report.changed),
        format_list(&report.skipped),
    )
}

/// Render ignore entries, one per line.
pub fn render_entries(entries: &[String]) -> String {
    entries.iter().map(|e| format!("{e}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linlib::StatRow;
    use std::path::PathBuf;

    fn sample_table() -> StatsTable {
        StatsTable::from_rows(&[
            StatRow {
                path: "src/main.rs".to_string(),
                lines: 120,
                max_width: 98,
                avg_width: 31.5,
            },
            StatRow {
                path: "a.txt".to_string(),
                lines: 2,
                max_width: 5,
                avg_width: 4.0,
            },
        ])
    }

    #[test]
    fn test_render_table_layout() {
        let output = render_table(&sample_table(), &Theme::plain());

        let expected = "\
Name         Lines  Max Width  Avg Width
-----------  -----  ---------  ---------
src/main.rs    120         98      31.50
a.txt            2          5       4.00
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_empty_table() {
        let output = render_table(&StatsTable::from_rows(&[]), &Theme::plain());

        assert_eq!(
            output,
            "Name  Lines  Max Width  Avg Width\n----  -----  ---------  ---------\n"
        );
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4, false), "ab  ");
        assert_eq!(pad("ab", 4, true), "  ab");
        assert_eq!(pad("abcdef", 4, true), "abcdef");
    }

    fn report(ignored: &[&str], changed: &[&str], skipped: &[&str]) -> IgnoreReport {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        IgnoreReport {
            root: PathBuf::from("/work/project"),
            file_existed: true,
            ignored: owned(ignored),
            changed: owned(changed),
            skipped: owned(skipped),
        }
    }

    #[test]
    fn test_render_add_report() {
        let output = render_add_report(&report(&["target/"], &["build/", "dist/"], &[]));

        assert_eq!(
            output,
            "base path: /work/project\nignored: [\"target/\"]\nto ignore: [\"build/\", \"dist/\"]\n"
        );
    }

    #[test]
    fn test_render_add_report_nothing_new() {
        let output = render_add_report(&report(&["build/"], &[], &["build/"]));

        assert!(output.ends_with("to ignore: []\n"));
    }

    #[test]
    fn test_render_remove_report() {
        let output = render_remove_report(&report(&["a/", "b/"], &["a/"], &["c/"]));

        assert_eq!(
            output,
            "base path: /work/project\nremoved: [\"a/\"]\nnot found: [\"c/\"]\n"
        );
    }

    #[test]
    fn test_render_entries() {
        let entries = vec!["build/".to_string(), "dist/".to_string()];
        assert_eq!(render_entries(&entries), "build/\ndist/\n");
        assert_eq!(render_entries(&[]), "");
    }
}
