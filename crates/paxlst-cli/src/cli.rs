//! CLI argument definitions for the PAXLST cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "paxlst-clean",
    version,
    about = "PAXLST Cleaner - Validate and normalize UN/EDIFACT PAXLST messages",
    long_about = "Validate and normalize UN/EDIFACT PAXLST passenger list messages.\n\n\
                  Checks mandatory envelope and message segments, strips encoding\n\
                  noise, and reformats the bounded message one segment per line."
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
    /// Validate and clean a single message file.
    Clean(CleanArgs),

    /// Check a message file for mandatory segments without writing output.
    Check(CheckArgs),

    /// Clean every message file in a source directory into a target directory.
    Batch(BatchArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the message file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the cleaned message here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the message file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the validation report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Directory containing raw message files.
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Directory receiving cleaned files under the same names.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Continue past files that fail instead of halting the batch.
    ///
    /// By default a single malformed file stops the whole batch, so a
    /// partially cleaned drop is never shipped silently.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Write a JSON batch report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
