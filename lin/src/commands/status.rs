//! `lin status`: line statistics for every file under the given paths.

use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use linlib::{collect_stats, SortKey, StatRow, StatsTable, StatusOptions};
use serde::Serialize;
use tracing::debug;

use super::LinCommand;
use crate::context::LinContext;
use crate::render::{render_table, Theme};

/// JSON shape of the status report
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    sort: SortKey,
    relative: bool,
    files: &'a [StatRow],
}

/// Handler for the status command
pub struct StatusCommand;

impl StatusCommand {
    fn options(matches: &ArgMatches) -> anyhow::Result<StatusOptions> {
        let sort = match matches.get_one::<String>("sort") {
            Some(key) => SortKey::from_str(key)?,
            None => SortKey::default(),
        };
        Ok(StatusOptions::new()
            .sort(sort)
            .relative(matches.get_flag("relpath")))
    }
}

impl LinCommand for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn definition(&self) -> Command {
        Command::new(self.name())
            .about("Generate statistics")
            .arg(
                Arg::new("path")
                    .num_args(0..)
                    .default_value(".")
                    .help("Path or paths to show statistics for"),
            )
            .arg(
                Arg::new("sort")
                    .short('s')
                    .long("sort")
                    .default_value("L")
                    .value_parser(["A", "L", "W"])
                    .ignore_case(true)
                    .help("Sort by (A)lphabetical, (L)ines or (W)idth"),
            )
            .arg(
                Arg::new("relpath")
                    .short('r')
                    .long("relpath")
                    .action(ArgAction::SetTrue)
                    .help("Show paths relative to each given path"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .default_value("table")
                    .value_parser(["table", "json"])
                    .help("Output format"),
            )
    }

    fn run(&self, matches: &ArgMatches, _ctx: &LinContext) -> anyhow::Result<String> {
        let paths: Vec<&String> = matches
            .get_many::<String>("path")
            .map(|v| v.collect())
            .unwrap_or_default();
        let options = Self::options(matches)?;

        let rows = collect_stats(&paths, options);
        debug!(rows = rows.len(), sort = options.sort.code(), "collected stats");

        if matches.get_one::<String>("output").map(String::as_str) == Some("json") {
            let report = StatusReport {
                sort: options.sort,
                relative: options.relative,
                files: &rows,
            };
            let mut output = serde_json::to_string_pretty(&report)?;
            output.push('\n');
            return Ok(output);
        }

        let theme = if console::colors_enabled() {
            Theme::styled()
        } else {
            Theme::plain()
        };
        Ok(render_table(&StatsTable::from_rows(&rows), &theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // No working directory: status must not need one
    fn ctx() -> LinContext {
        LinContext {
            cwd: None,
            home: None,
            verbose: false,
        }
    }

    fn parse(args: &[&str]) -> ArgMatches {
        StatusCommand
            .definition()
            .try_get_matches_from(std::iter::once("status").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let matches = parse(&[]);
        let options = StatusCommand::options(&matches).unwrap();

        assert_eq!(options, StatusOptions::new());
        let paths: Vec<&String> = matches.get_many::<String>("path").unwrap().collect();
        assert_eq!(paths, vec!["."]);
    }

    #[test]
    fn test_sort_flag() {
        let options = StatusCommand::options(&parse(&["-s", "W", "-r"])).unwrap();
        assert_eq!(options.sort, SortKey::Width);
        assert!(options.relative);

        let options = StatusCommand::options(&parse(&["--sort", "a"])).unwrap();
        assert_eq!(options.sort, SortKey::Alphabetical);
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let result = StatusCommand
            .definition()
            .try_get_matches_from(["status", "-s", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_json() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "ab\nabcd\n").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();
        let base = temp.path().to_string_lossy().to_string();

        let output = StatusCommand
            .run(&parse(&[base.as_str(), "-r", "-o", "json"]), &ctx())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["sort"], "Lines");
        assert_eq!(parsed["files"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["files"][0]["path"], "a.txt");
        assert_eq!(parsed["files"][0]["lines"], 2);
        assert_eq!(parsed["files"][0]["max_width"], 5);
        assert_eq!(parsed["files"][0]["avg_width"], 4.0);
    }
}
