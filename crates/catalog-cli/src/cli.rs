//! CLI argument definitions for `catalog-clean`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use catalog_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "catalog-clean",
    version,
    about = "Brand catalog cleaner - normalize product tables against reference data",
    long_about = "Normalize per-brand product catalog uploads.\n\n\
                  Splits item names into style, description, size and color,\n\
                  derives categorical attributes and fills gaps from the brand's\n\
                  reference collection. Writes a ';'-delimited CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean one catalog file and write the normalized CSV.
    Clean(CleanArgs),

    /// List supported brands.
    Brands,

    /// Show row/column counts and null statistics of a file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Catalog file to clean (.csv, .xlsx, .xls).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Brand code (CH, CL, SK, NE, FB, PB, BI, AD). Detected from the file
    /// name when omitted.
    #[arg(long = "brand", short = 'b', value_name = "CODE")]
    pub brand: Option<String>,

    /// Directory of reference collections (*.csv, *.json).
    #[arg(long = "references", short = 'r', value_name = "DIR")]
    pub references: Option<PathBuf>,

    /// Maximum rows loaded from each reference collection.
    #[arg(long = "reference-limit", value_name = "N")]
    pub reference_limit: Option<usize>,

    /// Output file (default: <brand>_cleaned_<timestamp>.csv).
    #[arg(long = "output", short = 'o', value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the generated output file (default: next to INPUT).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Field delimiter of the output CSV.
    #[arg(long = "delimiter", short = 'd', value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// TOML file with default settings; flags override it.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write diagnostics and summary figures as JSON.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Leave rows grouped by style validity after a partitioned merge.
    #[arg(long = "no-restore-row-order")]
    pub no_restore_row_order: bool,

    /// Clean and report without writing the output CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File to profile (.csv, .xlsx, .xls).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
