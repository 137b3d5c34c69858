//! Error types for the I/O boundary of the pipeline.
//!
//! The classification core itself never fails: per-record problems are
//! reported as [`crate::schedule::Outcome`] variants. These errors cover
//! configuration loading and reading record input.

use std::path::PathBuf;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid window for hour {hour}: {reason}")]
    InvalidWindow { hour: u32, reason: String },

    #[error("Invalid thresholds: {reason}")]
    InvalidThresholds { reason: String },

    #[error("UTC offset {hours}h is outside the supported range (-12..=14)")]
    InvalidOffset { hours: i32 },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Errors that can occur while reading raw cue records.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not a valid cue record list: {0}")]
    Json(#[from] serde_json::Error),
}

/// A record that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("start time {millis}ms is outside the representable range")]
    StartOutOfRange { millis: u64 },
}
