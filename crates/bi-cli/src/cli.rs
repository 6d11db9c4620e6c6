//! CLI argument definitions for the star-schema pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bi-pipeline",
    version,
    about = "Build an energy x AI-content star schema from two CSV datasets",
    long_about = "Build an energy x AI-content star schema from two CSV datasets.\n\n\
                  Writes one fact table and five dimension tables as CSV, plus a\n\
                  manifest.json with row counts and SHA-256 digests."
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
    /// Run every stage and write the star-schema tables.
    Run(RunArgs),

    /// Print the effective alias, region and tool-type tables.
    Lookups(LookupsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Energy consumption CSV (one row per country and year, duplicates allowed).
    #[arg(long = "energy", value_name = "CSV")]
    pub energy: PathBuf,

    /// AI-content impact CSV.
    #[arg(long = "ai-content", value_name = "CSV")]
    pub ai_content: PathBuf,

    /// Output directory for the table files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// TOML file overriding the built-in lookup tables.
    #[arg(long = "lookups", value_name = "TOML")]
    pub lookups: Option<PathBuf>,

    /// Handling of fact rows whose natural key has no dimension entry.
    #[arg(long = "unmapped-keys", value_enum, default_value = "fail")]
    pub unmapped_keys: UnmappedKeysArg,

    /// Fail when an input has no usable rows.
    #[arg(long = "reject-empty")]
    pub reject_empty: bool,

    /// Build every table and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct LookupsArgs {
    /// TOML file overriding the built-in lookup tables.
    #[arg(long = "lookups", value_name = "TOML")]
    pub lookups: Option<PathBuf>,
}

/// CLI choices for unmapped natural keys.
#[derive(Clone, Copy, ValueEnum)]
pub enum UnmappedKeysArg {
    /// Abort the run.
    Fail,
    /// Write -1 as the foreign key and warn.
    Sentinel,
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
