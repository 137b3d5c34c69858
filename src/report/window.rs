//! Reporting windows keyed by the hour a report runs.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::ConfigError;

/// Half-open time-of-day range `[start, end)`. An `end` of midnight means
/// the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && (time < self.end || self.ends_at_midnight())
    }

    pub fn ends_at_midnight(&self) -> bool {
        self.end.num_seconds_from_midnight() == 0
    }
}

/// Window table entry as written in config (`start`/`end` in 12-hour text).
///
/// Windows never wrap past midnight; `end = "12:00 AM"` closes the window at
/// the end of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub hour: u32,
    pub start: String,
    pub end: String,
}

impl WindowSpec {
    fn new(hour: u32, start: &str, end: &str) -> Self {
        Self {
            hour,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    fn resolve(&self) -> Result<TimeWindow, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidWindow {
            hour: self.hour,
            reason,
        };
        if self.hour > 23 {
            return Err(invalid("hour must be 0-23".to_string()));
        }
        let start = clock::parse_clock(&self.start)
            .ok_or_else(|| invalid(format!("bad start time '{}'", self.start)))?;
        let end = clock::parse_clock(&self.end)
            .ok_or_else(|| invalid(format!("bad end time '{}'", self.end)))?;
        let window = TimeWindow::new(start, end);
        if start >= end && !window.ends_at_midnight() {
            return Err(invalid(format!("start {} is not before end {}", self.start, self.end)));
        }
        Ok(window)
    }
}

/// Default schedule: each report covers the block that has just ended.
pub fn default_specs() -> Vec<WindowSpec> {
    vec![
        WindowSpec::new(10, "6:00 AM", "10:00 AM"),
        WindowSpec::new(13, "10:00 AM", "1:00 PM"),
        WindowSpec::new(16, "1:00 PM", "4:00 PM"),
        WindowSpec::new(19, "4:00 PM", "7:00 PM"),
        WindowSpec::new(23, "7:00 PM", "11:00 PM"),
    ]
}

/// Hour-of-day → reporting window. Hours without an entry are quiet periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTable {
    windows: BTreeMap<u32, TimeWindow>,
}

impl WindowTable {
    /// Validate and index config entries. A repeated hour keeps the last entry.
    pub fn from_specs(specs: &[WindowSpec]) -> Result<Self, ConfigError> {
        let windows = specs
            .iter()
            .map(|spec| -> Result<_, ConfigError> { Ok((spec.hour, spec.resolve()?)) })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { windows })
    }

    pub fn lookup(&self, hour: u32) -> Option<&TimeWindow> {
        self.windows.get(&hour)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &TimeWindow)> {
        self.windows.iter().map(|(hour, window)| (*hour, window))
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for WindowTable {
    fn default() -> Self {
        let windows = default_specs()
            .iter()
            .filter_map(|spec| spec.resolve().ok().map(|w| (spec.hour, w)))
            .collect();
        Self { windows }
    }
}

/// Hour of day at the station's fixed offset.
pub fn current_hour(now: DateTime<Utc>, offset: FixedOffset) -> u32 {
    now.with_timezone(&offset).hour()
}
