//! Error types for linlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting stats or managing ignore files
#[derive(Error, Debug)]
pub enum LinError {
    /// Failed to read the ignore file (other than it being absent)
    #[error("failed to read ignore file '{path}': {source}")]
    IgnoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the ignore file
    #[error("failed to write ignore file '{path}': {source}")]
    IgnoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown sort key
    #[error("unknown sort key '{0}' (expected one of A, L, W)")]
    InvalidSortKey(String),
}
