//! CLI argument definitions for the training pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use vins_model::config;

#[derive(Parser)]
#[command(
    name = "vins",
    version,
    about = "Vehicle-insurance training pipeline",
    long_about = "Run the vehicle-insurance training pipeline.\n\n\
                  Pulls records from a MongoDB collection, materializes them as a\n\
                  CSV feature store, splits them into train/test subsets and\n\
                  validates both against the dataset schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Run the ingestion and validation stages.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Document-store collection to ingest.
    #[arg(long, value_name = "NAME", default_value = config::DEFAULT_COLLECTION)]
    pub collection: String,

    /// Database holding the collection.
    #[arg(long, value_name = "NAME", default_value = config::DATABASE_NAME)]
    pub database: String,

    /// Root directory for run artifacts.
    #[arg(long = "artifact-dir", value_name = "DIR", default_value = config::ARTIFACT_DIR)]
    pub artifact_dir: PathBuf,

    /// Path to the dataset schema file.
    #[arg(long, value_name = "PATH", default_value = config::DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Fraction of rows routed to the test subset.
    #[arg(long, value_name = "RATIO", default_value_t = config::DEFAULT_SPLIT_RATIO)]
    pub ratio: f64,

    /// Seed for the train/test shuffle; omit for a fresh shuffle each run.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults_match_constants() {
        let cli = Cli::parse_from(["vins", "run"]);
        let Command::Run(args) = cli.command;
        assert_eq!(args.collection, config::DEFAULT_COLLECTION);
        assert_eq!(args.ratio, config::DEFAULT_SPLIT_RATIO);
        assert!(args.seed.is_none());
    }
}
