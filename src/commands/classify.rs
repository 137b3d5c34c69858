//! Classification trace handler

use std::path::Path;

use anyhow::Result;

use spotcheck::cli::ClassifyArgs;
use spotcheck::{Outcome, Pipeline};

use super::{load_config, read_records};

/// Print each record's encoded line and what became of it.
///
/// With a category, only records classified into it are shown.
pub fn handle_classify(config_path: Option<&Path>, args: &ClassifyArgs) -> Result<()> {
    let pipeline = Pipeline::new(load_config(config_path)?.settings()?);
    let records = read_records(&args.input.input)?;

    for trace in pipeline.trace(&records) {
        if let Some(category) = args.category {
            if trace.outcome.item().map(|item| item.category) != Some(category) {
                continue;
            }
        }
        let line = trace
            .encoded_line
            .unwrap_or_else(|| format!("- : {}", trace.record.title));
        let verdict = match &trace.outcome {
            Outcome::Classified(item) => format!("{}: {}", item.category, item.description),
            Outcome::Filtered(rule) => format!("skipped ({})", rule),
            Outcome::Malformed(reason) => format!("malformed ({})", reason),
        };
        println!("{}\n    -> {}", line, verdict);
    }
    Ok(())
}
