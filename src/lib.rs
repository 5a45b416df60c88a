//! Recursive directory listing
//!
//! Lists every non-directory entry beneath a root path, depth-first, with the
//! first traversal error aborting the whole listing. A small CLI front end
//! renders the result as plain lines, NUL-terminated paths, or JSON.

pub mod cli;
pub mod error;
pub mod lister;
pub mod output;

// Re-export commonly used types
pub use error::{CliError, CliResult};
pub use lister::{iter_files, list_files, ListResult};
pub use output::{ListingSummary, OutputConfig, OutputFormat};
