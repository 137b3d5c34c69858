//! Command-line definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::schedule::Category;

/// Airplay reports of credit mentions and ads from a now-playing log
#[derive(Debug, Parser)]
#[command(name = "spotcheck", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to $SPOTCHECK_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the airplay report for the current (or given) hour
    Report(ReportArgs),
    /// Show how each record was classified
    Classify(ClassifyArgs),
    /// Print normalized records as a JSON snapshot keyed by start time
    Normalize(NormalizeArgs),
    /// List the reporting window table
    Windows,
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON array of cue records ('-' for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print one `data=<json>` line for workflow step outputs
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show records classified into this category ('ad', 'credit mention')
    #[arg(short, long)]
    pub category: Option<Category>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hour of day (station time) selecting the window
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24), conflicts_with = "at")]
    pub hour: Option<u32>,

    /// Treat this RFC 3339 instant as "now"
    #[arg(long, value_name = "TIME")]
    pub at: Option<DateTime<Utc>>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Input is encoded '<h:mm am/pm> : <text>' lines instead of JSON records
    #[arg(long)]
    pub encoded: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
