//! Command-line interface definitions for `locale-inspect`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Report formats supported by `locale-inspect`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Emit a human-readable schema summary.
    Summary,
    /// Emit the full schema report as JSON.
    Json,
}

/// Parsed CLI arguments for `locale-inspect`.
#[derive(Debug, Parser)]
#[command(name = "locale-inspect")]
#[command(about = "Derive and report the parameter schema of locale dictionaries")]
#[command(version)]
pub struct Args {
    /// Locale JSON file, or a directory of `<locale>.json` files.
    #[arg(value_name = "path")]
    pub path: Utf8PathBuf,
    /// Locale to report on (defaults to the representative locale for a
    /// directory, or the file stem for a single file).
    #[arg(long, value_name = "locale")]
    pub locale: Option<String>,
    /// Restrict the key listing to one scope.
    #[arg(long, value_name = "scope")]
    pub scope: Option<String>,
    /// Report format selection.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
    /// Write the report to this file instead of standard output.
    #[arg(long, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Include lenient-parse diagnostics in the report.
    #[arg(long)]
    pub verbose: bool,
}
