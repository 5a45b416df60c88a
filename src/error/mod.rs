//! Error types for listing and for the command-line front end

use anyhow::Error;
use std::path::PathBuf;

pub use crate::lister::ListResult;

/// Errors surfaced by the `dirlist` command
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The walk failed; the lister's error is passed through untouched.
    #[error(transparent)]
    Traversal(#[from] walkdir::Error),

    #[error("Failed to write output to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] Error),
}

impl CliError {
    pub fn output(path: PathBuf, source: std::io::Error) -> Self {
        Self::Output { path, source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Traversal(err) => {
                let reason = err
                    .io_error()
                    .map(|io| io.to_string())
                    .unwrap_or_else(|| err.to_string());
                match (err.path(), err.loop_ancestor()) {
                    (Some(path), Some(ancestor)) => format!(
                        "Traversal failed at {}: filesystem loop back to {}",
                        path.display(),
                        ancestor.display()
                    ),
                    (Some(path), None) => {
                        format!("Traversal failed at {}: {}", path.display(), reason)
                    }
                    (None, _) => format!("Traversal failed: {}", reason),
                }
            }
            Self::Other(err) => format!("Unexpected error: {}", err),
            _ => self.to_string(),
        }
    }

    /// The underlying I/O error kind, when there is one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Traversal(err) => err.io_error().map(|io| io.kind()),
            Self::Output { source, .. } | Self::Stdout(source) => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;
