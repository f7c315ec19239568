//! `lin ignore`: maintain the project's `.linignore`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use linlib::{add_to_project, ignore_file_path, remove_from_project, IgnoreFile, PROJECT_MARKER};
use tracing::{debug, warn};

use super::LinCommand;
use crate::context::LinContext;
use crate::render::{render_add_report, render_entries, render_remove_report};

/// Handler for the ignore command
pub struct IgnoreCommand;

impl LinCommand for IgnoreCommand {
    fn name(&self) -> &'static str {
        "ignore"
    }

    fn definition(&self) -> Command {
        Command::new(self.name())
            .about("Command to add, list or remove ignored paths")
            .arg(
                Arg::new("path")
                    .num_args(1..)
                    .required_unless_present("list")
                    .help("Specify path or paths"),
            )
            .arg(
                Arg::new("list")
                    .short('l')
                    .long("list")
                    .action(ArgAction::SetTrue)
                    .conflicts_with_all(["path", "remove", "title"])
                    .help("List the ignored paths"),
            )
            .arg(
                Arg::new("remove")
                    .short('r')
                    .long("remove")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("title")
                    .help("Remove the given paths instead of adding them"),
            )
            .arg(
                Arg::new("title")
                    .short('t')
                    .long("title")
                    .help("Comment line written above the newly added paths"),
            )
    }

    fn run(&self, matches: &ArgMatches, ctx: &LinContext) -> anyhow::Result<String> {
        let cwd = ctx.cwd()?;
        let Some(root) = ctx.project_root()? else {
            warn!(
                cwd = %cwd.display(),
                "no {PROJECT_MARKER} found between the current directory and home, nothing to do"
            );
            return Ok(String::new());
        };
        debug!(root = %root.display(), "using project root");

        if matches.get_flag("list") {
            let file = IgnoreFile::load(ignore_file_path(&root))?;
            if !file.existed() {
                report_missing_file(&root);
            }
            return Ok(render_entries(&file.entries()));
        }

        let paths: Vec<&String> = matches
            .get_many::<String>("path")
            .map(|v| v.collect())
            .unwrap_or_default();

        if matches.get_flag("remove") {
            let report = remove_from_project(&root, &paths)?;
            if !report.file_existed {
                report_missing_file(&root);
            }
            if !report.is_changed() && !ctx.verbose {
                return Ok(String::new());
            }
            return Ok(render_remove_report(&report));
        }

        let title = matches.get_one::<String>("title").map(String::as_str);
        let report = add_to_project(&root, &paths, title)?;
        if !report.file_existed {
            report_missing_file(&root);
        }
        if !report.is_changed() {
            debug!(skipped = ?report.skipped, "all paths already ignored");
            if !ctx.verbose {
                return Ok(String::new());
            }
        }
        Ok(render_add_report(&report))
    }
}

/// Tell the user the ignore file did not exist yet.
fn report_missing_file(root: &std::path::Path) {
    eprintln!("File not found: {}", ignore_file_path(root).display());
}
