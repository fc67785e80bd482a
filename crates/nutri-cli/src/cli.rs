//! CLI argument definitions for the `nutri` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nutri",
    version,
    about = "Normalize per-country vitamin and mineral supplement ranges",
    long_about = "Normalize hand-transcribed vitamin and mineral supplement ranges.\n\n\
                  Reads the per-country regulatory tables from a TOML data file and\n\
                  writes one typed row per (country, ingredient, category) as CSV."
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
    /// Normalize the data file and write CSV outputs.
    Normalize(NormalizeArgs),

    /// Compare one ingredient across countries.
    Ingredient(IngredientArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Data file to read (default: $NUTRI_DATA_FILE or the bundled data file).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output directory for the CSV files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Leave the unregulated side of one-sided ranges empty instead of
    /// copying the known bound into it.
    #[arg(long = "keep-open-bounds")]
    pub keep_open_bounds: bool,

    /// Normalize and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct IngredientArgs {
    /// Ingredient name, e.g. "Biotina" or "Retinol" (case-insensitive).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Data file to read (default: $NUTRI_DATA_FILE or the bundled data file).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,
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
