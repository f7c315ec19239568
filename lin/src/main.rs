//! # lin
//!
//! A simple tool to overview your projects.
//!
//! ## Overview
//!
//! lin is built on top of linlib and provides a command-line interface for
//! per-file line statistics and for keeping a per-project ignore list.
//!
//! ## Usage
//!
//! ```bash
//! # Line count, max width and average width of every file below .
//! lin status
//!
//! # Several paths, sorted by widest line, paths shown relative to each base
//! lin status src tests -s W -r
//!
//! # Machine-readable output
//! lin status -o json
//!
//! # Add paths to <project>/.linignore (project root is marked by .lininfo)
//! lin ignore build/ dist/ -t generated
//!
//! # Show or remove ignored paths
//! lin ignore -l
//! lin ignore -r dist/
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod render;

use commands::{build_command, dispatch, registry};
use context::LinContext;

/// Install the stderr logger.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug output and the
/// default shows warnings only.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let registry = registry();
    let matches = build_command(&registry).get_matches();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let ctx = LinContext::from_env(verbose);
    let result = dispatch(&registry, &matches, &ctx);

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
