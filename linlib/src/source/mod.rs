//! Source discovery: find what to read.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **File discovery**: every regular file under a base path
//! - **Project discovery**: the nearest ancestor holding a `.lininfo` marker
//!
//! ## Example
//!
//! ```rust,ignore
//! use linlib::source::{discover_files, find_project_root};
//!
//! let files = discover_files("src");
//! let root = find_project_root(std::env::current_dir()?, dirs::home_dir().as_deref());
//! ```

pub mod project;
pub mod walk;

pub use project::{
    find_project_root, ignore_file_path, is_project_root, IGNORE_FILE, PROJECT_MARKER,
};
pub use walk::discover_files;
