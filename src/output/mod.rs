//! Rendering of listings for output

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

pub mod stats;

pub use stats::ListingSummary;

/// How a listing is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Plain,
    /// Each path terminated by a NUL byte
    Nul,
    /// A JSON array of path strings
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Nul => "nul",
            OutputFormat::Json => "json",
        }
    }
}

/// Output configuration options
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Listing format
    pub format: OutputFormat,
    /// Compact JSON instead of pretty-printed
    pub compact: bool,
    /// Destination file; standard output when unset
    pub destination: Option<PathBuf>,
}

impl OutputConfig {
    /// Check the combination of options
    pub fn validate(&self) -> Result<(), String> {
        if self.compact && self.format != OutputFormat::Json {
            return Err(format!(
                "--compact only applies to json output, not {}",
                self.format.as_str()
            ));
        }

        if let Some(dest) = &self.destination {
            if dest.as_os_str().is_empty() {
                return Err("Output path must not be empty".to_string());
            }
            if dest.is_dir() {
                return Err(format!("Output path is a directory: {}", dest.display()));
            }
        }

        Ok(())
    }
}

/// Render a listing into bytes in the configured format.
///
/// An empty listing renders as nothing, or `[]` for JSON.
pub fn render(paths: &[PathBuf], config: &OutputConfig) -> CliResult<Vec<u8>> {
    match config.format {
        OutputFormat::Plain => Ok(render_terminated(paths, b'\n')),
        OutputFormat::Nul => Ok(render_terminated(paths, b'\0')),
        OutputFormat::Json => {
            let strings: Vec<String> = paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            let mut out = if config.compact {
                serde_json::to_vec(&strings)?
            } else {
                serde_json::to_vec_pretty(&strings)?
            };
            out.push(b'\n');
            Ok(out)
        }
    }
}

fn render_terminated(paths: &[PathBuf], terminator: u8) -> Vec<u8> {
    let mut out = Vec::new();
    for path in paths {
        out.extend_from_slice(&path_bytes(path));
        out.push(terminator);
    }
    out
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> std::borrow::Cow<'_, [u8]> {
    match path.to_string_lossy() {
        std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(s.as_bytes()),
        std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into_bytes()),
    }
}

/// Write rendered output to the configured destination
pub fn write_output(bytes: &[u8], config: &OutputConfig) -> CliResult<()> {
    match &config.destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CliError::output(parent.to_path_buf(), e))?;
            }
            std::fs::write(path, bytes).map_err(|e| CliError::output(path.clone(), e))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "listing written");
            Ok(())
        }
        None => write_stream(&mut std::io::stdout().lock(), bytes),
    }
}

/// Write to a stream such as stdout. A reader that hangs up early
/// (`dirlist big | head`) is not an error.
pub fn write_stream<W: Write>(writer: &mut W, bytes: &[u8]) -> CliResult<()> {
    match writer.write_all(bytes).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed early");
            Ok(())
        }
        result => result.map_err(CliError::Stdout),
    }
}
