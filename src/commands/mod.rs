//! Subcommand handlers.

pub mod classify;
pub mod config;
pub mod normalize;
pub mod report;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use spotcheck::cue::{self, RawCueRecord};
use spotcheck::Config;

/// Load config from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.context("Failed to load configuration")
}

/// Read cue records from a file, or stdin for `-`.
pub fn read_records(input: &str) -> Result<Vec<RawCueRecord>> {
    let records = if input == "-" {
        cue::load_records(io::stdin().lock()).context("Failed to read records from stdin")?
    } else {
        let file = File::open(input).with_context(|| format!("Failed to open {}", input))?;
        cue::load_records(io::BufReader::new(file))
            .with_context(|| format!("Failed to read records from {}", input))?
    };
    tracing::info!(count = records.len(), "Loaded cue records");
    Ok(records)
}

/// Read encoded report lines from a file, or stdin for `-`.
pub fn read_lines(input: &str) -> Result<Vec<String>> {
    let content = if input == "-" {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read lines from stdin")?;
        content
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to open {}", input))?
    };
    Ok(content.lines().map(str::to_string).collect())
}
