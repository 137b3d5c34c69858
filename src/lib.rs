//! spotcheck - airplay reports from a station's now-playing log.
//!
//! Raw cue records (title, start instant, duration) are classified into
//! credit mentions and ads, filtered to a reporting window, deduplicated
//! and rendered as plain text.
//!
//! # Module Structure
//!
//! - [`cue`] - Raw and normalized records, JSON input and snapshots
//! - [`schedule`] - Title classification and categorization
//! - [`report`] - Window table, selection and rendering
//! - [`pipeline`] - End-to-end orchestration
//! - [`config`] - TOML configuration

pub mod cli;
pub mod clock;
pub mod config;
pub mod cue;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod schedule;

pub use config::{Config, Settings};
pub use cue::{NormalizedRecord, RawCueRecord};
pub use error::{ConfigError, InputError, NormalizeError};
pub use pipeline::{Pipeline, PipelineStats, Report};
pub use report::{TimeWindow, WindowTable};
pub use schedule::{Category, FilterRule, Outcome, ScheduleItem};
