//! Command-line interface module

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{CliError, CliResult};
use crate::lister::list_files;
use crate::output::{self, ListingSummary, OutputConfig, OutputFormat};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "dirlist")]
#[command(about = "Recursively list every non-directory entry beneath a root path")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Root path to walk (any OS path, including an empty one)
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub root: PathBuf,

    /// Output format (default: plain)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,

    /// Print a listing summary to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Format {
    #[value(name = "plain", alias = "lines")]
    Plain,
    #[value(name = "nul", alias = "null", alias = "0")]
    Nul,
    #[value(name = "json")]
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => OutputFormat::Plain,
            Format::Nul => OutputFormat::Nul,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub output_config: OutputConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> CliResult<Self> {
        let output_config = OutputConfig {
            format: args.format.map(Into::into).unwrap_or_default(),
            compact: args.compact,
            destination: args.output.clone(),
        };

        output_config.validate().map_err(CliError::configuration)?;

        Ok(Self {
            args,
            output_config,
        })
    }

    /// Root path as given on the command line
    pub fn root(&self) -> &Path {
        &self.args.root
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Default log filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.is_verbose() {
            "debug"
        } else if self.is_quiet() {
            "error"
        } else {
            "warn"
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.output_config.destination {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the
/// verbosity flags.
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .map_err(|e| CliError::Other(anyhow::Error::new(e).context("Invalid log filter")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to initialise logging: {}", e)))
}

/// List the configured root and write the result.
///
/// The listing is fully collected before anything is written, so a failed
/// walk produces no output at all.
pub fn run(config: &CliConfig) -> CliResult<ListingSummary> {
    let root = config.root();
    tracing::info!(
        root = %root.display(),
        format = config.output_config.format.as_str(),
        output = %config.output_description(),
        "listing files"
    );

    let started = Instant::now();
    let files = list_files(root)?;
    let summary = ListingSummary::new(root, files.len(), started.elapsed());

    let bytes = output::render(&files, &config.output_config)?;
    output::write_output(&bytes, &config.output_config)?;

    if config.want_stats() {
        eprintln!("{}", summary.render());
    }

    Ok(summary)
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &CliError) {
    eprintln!("✗ {}", error.user_message());

    match error {
        CliError::Traversal(err) if err.loop_ancestor().is_some() => {}
        CliError::Traversal(_) => match error.io_kind() {
            Some(std::io::ErrorKind::NotFound) => {
                eprintln!("\nTip: Check that the root path exists");
            }
            Some(std::io::ErrorKind::PermissionDenied) => {
                eprintln!("\nTip: The listing needs read access to every directory under the root");
            }
            _ => {}
        },
        CliError::Configuration { .. } => {
            eprintln!("\nTry 'dirlist --help' for usage information.");
        }
        _ => {}
    }
}
