//! Subcommand registry and dispatch.
//!
//! Every subcommand implements [`LinCommand`]: it contributes its own clap
//! definition and runs against the parsed matches. The registry is a plain
//! list built at startup; the root command is assembled from it.

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::context::LinContext;

pub mod ignore;
pub mod status;

pub use ignore::IgnoreCommand;
pub use status::StatusCommand;

/// A `lin` subcommand.
pub trait LinCommand {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str;

    /// Clap definition: about text and flags.
    fn definition(&self) -> Command;

    /// Execute with parsed arguments, returning the text to print.
    fn run(&self, matches: &ArgMatches, ctx: &LinContext) -> anyhow::Result<String>;
}

/// All registered subcommands.
pub fn registry() -> Vec<Box<dyn LinCommand>> {
    vec![Box::new(StatusCommand), Box::new(IgnoreCommand)]
}

/// Build the root clap command from the registry.
pub fn build_command(registry: &[Box<dyn LinCommand>]) -> Command {
    let root = Command::new("lin")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("A simple tool to overview your projects")
        .after_help("lin")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show debug logging and full reports"),
        );

    registry
        .iter()
        .fold(root, |cmd, handler| cmd.subcommand(handler.definition()))
}

/// Run the subcommand selected in `matches`.
pub fn dispatch(
    registry: &[Box<dyn LinCommand>],
    matches: &ArgMatches,
    ctx: &LinContext,
) -> anyhow::Result<String> {
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no subcommand given"))?;

    let handler = registry
        .iter()
        .find(|handler| handler.name() == name)
        .ok_or_else(|| anyhow!("unknown subcommand '{name}'"))?;

    handler.run(sub_matches, ctx)
}
