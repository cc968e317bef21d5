//! CLI argument definitions for the cut-off validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cutoff-validator",
    version,
    about = "Cut-off file validator - Review cut-off extracts against the closing rule set",
    long_about = "Validate a delimited cut-off extract against the fixed business rule set.\n\n\
                  Every rule violation becomes a finding row; the run always produces a\n\
                  complete findings report and can export it as CSV and/or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a cut-off file and export its findings report.
    Validate(ValidateArgs),

    /// List the hard-coded rule set of this report version.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the delimited cut-off file to review.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter of the upload.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,

    /// Load numeric/boolean-looking cells with their coerced kind instead of
    /// text (mirrors spreadsheet-style ingestion upstream).
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// Output directory for exported reports (default: <FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format to export.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ReportFormatArg,

    /// Validate and print findings without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of data rows shown in the preview table (0 disables).
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
