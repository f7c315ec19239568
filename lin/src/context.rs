//! Per-invocation context handed to every command.

use std::path::{Path, PathBuf};

use anyhow::Context;
use linlib::find_project_root;

/// Environment a command runs in.
///
/// Built once in `main` and passed by reference to the command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinContext {
    /// Working directory the tool was started in, `None` when it could not
    /// be determined (for example, it was deleted)
    pub cwd: Option<PathBuf>,
    /// Home directory, the upper bound of the project root search
    pub home: Option<PathBuf>,
    /// `-v/--verbose` was given
    pub verbose: bool,
}

impl LinContext {
    /// Build a context from the process environment.
    ///
    /// An unreadable working directory is not an error here; only commands
    /// that need it fail, through [`LinContext::cwd`].
    pub fn from_env(verbose: bool) -> Self {
        Self {
            cwd: std::env::current_dir().ok(),
            home: dirs::home_dir(),
            verbose,
        }
    }

    /// Working directory, or an error when it could not be determined.
    pub fn cwd(&self) -> anyhow::Result<&Path> {
        self.cwd
            .as_deref()
            .context("cannot determine current directory")
    }

    /// Nearest project root above the working directory, if any.
    pub fn project_root(&self) -> anyhow::Result<Option<PathBuf>> {
        Ok(find_project_root(self.cwd()?, self.home.as_deref()))
    }
}
