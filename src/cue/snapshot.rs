//! JSON snapshot of normalized records, keyed by start epoch milliseconds.
//!
//! Shape: `{"<start ms>": {"Title": .., "StartTime": "YYYY-MM-DD HH:MM:SS", "Duration": "m:ss"}}`.
//! Collaborators that archive raw feed pulls store this form.

use std::collections::BTreeMap;

use serde::Serialize;

use super::NormalizedRecord;

/// One snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "Duration")]
    pub duration: String,
}

impl From<&NormalizedRecord> for SnapshotEntry {
    fn from(record: &NormalizedRecord) -> Self {
        Self {
            title: record.title.clone(),
            start_time: record.start_local.format("%Y-%m-%d %H:%M:%S").to_string(),
            duration: record.duration_display(),
        }
    }
}

/// Build the snapshot map. Later entries with the same key replace earlier ones.
pub fn build<'a, I>(records: I) -> BTreeMap<u64, SnapshotEntry>
where
    I: IntoIterator<Item = (u64, &'a NormalizedRecord)>,
{
    records
        .into_iter()
        .map(|(start, record)| (start, SnapshotEntry::from(record)))
        .collect()
}

/// Serialize the snapshot map as pretty JSON (non-ASCII titles kept verbatim).
pub fn to_json<'a, I>(records: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = (u64, &'a NormalizedRecord)>,
{
    serde_json::to_string_pretty(&build(records))
}

/// Single-line form, as written to a workflow step output.
pub fn to_compact_json<'a, I>(records: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = (u64, &'a NormalizedRecord)>,
{
    serde_json::to_string(&build(records))
}
