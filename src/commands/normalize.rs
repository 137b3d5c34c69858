//! Snapshot handler

use std::path::Path;

use anyhow::{Context, Result};

use spotcheck::cli::NormalizeArgs;
use spotcheck::cue::{self, snapshot};

use super::{load_config, read_records};

/// Print normalized records as a JSON snapshot. Unrepresentable records are skipped.
pub fn handle_normalize(config_path: Option<&Path>, args: &NormalizeArgs) -> Result<()> {
    let offset = load_config(config_path)?.offset()?;
    let records = read_records(&args.input.input)?;

    let mut normalized = Vec::with_capacity(records.len());
    for record in &records {
        match cue::normalize(record, offset) {
            Ok(n) => normalized.push((record.start_epoch_millis, n)),
            Err(e) => tracing::warn!(title = %record.title, "Skipping record: {}", e),
        }
    }

    let entries = normalized.iter().map(|(start, n)| (*start, n));
    if args.compact {
        let json = snapshot::to_compact_json(entries).context("Failed to serialize snapshot")?;
        println!("data={}", json);
    } else {
        let json = snapshot::to_json(entries).context("Failed to serialize snapshot")?;
        println!("{}", json);
    }
    Ok(())
}
