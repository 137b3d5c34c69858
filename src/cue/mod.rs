//! Raw cue records from the station feed and their normalized form.
//!
//! A raw record carries what the playout system logged: a title, the start
//! instant in epoch milliseconds (UTC) and the clip duration in milliseconds.
//! Normalization shifts the start into the station's fixed offset, drops
//! sub-second precision and reduces the duration to whole seconds.

pub mod snapshot;

use std::collections::BTreeMap;
use std::io::Read;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InputError, NormalizeError};

/// One broadcast event as delivered by the feed reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCueRecord {
    #[serde(default, alias = "cue_title", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, alias = "cue_time_start", deserialize_with = "lenient_u64")]
    pub start_epoch_millis: u64,
    #[serde(default, alias = "cue_time_duration", deserialize_with = "lenient_u64")]
    pub duration_millis: u64,
}

impl RawCueRecord {
    pub fn new(title: impl Into<String>, start_epoch_millis: u64, duration_millis: u64) -> Self {
        Self {
            title: title.into(),
            start_epoch_millis,
            duration_millis,
        }
    }
}

/// A record with its start in station-local civil time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub title: String,
    pub start_local: NaiveDateTime,
    pub duration_secs: u64,
}

impl NormalizedRecord {
    /// Duration as `m:ss`, floor-divided (90s → `1:30`).
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// Normalize a raw record against a fixed UTC offset.
///
/// Sub-second precision is truncated from both the start and the duration.
pub fn normalize(raw: &RawCueRecord, offset: FixedOffset) -> Result<NormalizedRecord, NormalizeError> {
    let out_of_range = NormalizeError::StartOutOfRange {
        millis: raw.start_epoch_millis,
    };
    let secs = i64::try_from(raw.start_epoch_millis / 1000).map_err(|_| out_of_range.clone())?;
    let start_local = DateTime::from_timestamp(secs, 0)
        .and_then(|utc| {
            utc.naive_utc()
                .checked_add_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        })
        .ok_or(out_of_range)?;

    Ok(NormalizedRecord {
        title: raw.title.clone(),
        start_local,
        duration_secs: raw.duration_millis / 1000,
    })
}

/// Order records by start time.
///
/// Records are keyed by `start_epoch_millis`; when two share a key the one
/// later in the input replaces the earlier one.
pub fn order_records(records: &[RawCueRecord]) -> Vec<RawCueRecord> {
    let mut keyed = BTreeMap::new();
    for record in records {
        if keyed
            .insert(record.start_epoch_millis, record.clone())
            .is_some()
        {
            tracing::debug!(
                start = record.start_epoch_millis,
                "Duplicate start key, keeping later record"
            );
        }
    }
    keyed.into_values().collect()
}

/// Read a JSON array of raw cue records.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<RawCueRecord>, InputError> {
    let records: Vec<RawCueRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The feed carries numbers as text; accept either form and treat null or
/// blank as zero.
fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(0)
            } else {
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}
