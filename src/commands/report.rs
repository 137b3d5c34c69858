//! Report and window table handlers

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use spotcheck::clock::format_clock;
use spotcheck::cli::ReportArgs;
use spotcheck::report::current_hour;
use spotcheck::Pipeline;

use super::{load_config, read_lines, read_records};

/// Render the report for the selected hour.
///
/// A quiet hour is not an error: a notice goes to stderr and nothing is written.
pub fn handle_report(config_path: Option<&Path>, args: &ReportArgs) -> Result<()> {
    let settings = load_config(config_path)?.settings()?;
    let hour = match args.hour {
        Some(hour) => hour,
        None => current_hour(args.at.unwrap_or_else(Utc::now), settings.offset),
    };
    let pipeline = Pipeline::new(settings);

    let Some(window) = pipeline.window_for(hour) else {
        eprintln!("No reporting window for hour {}; nothing to report.", hour);
        return Ok(());
    };
    tracing::info!(
        hour,
        "Reporting window {} - {}",
        format_clock(window.start),
        format_clock(window.end)
    );

    let report = if args.encoded {
        let lines = read_lines(&args.input.input)?;
        pipeline.run_lines(lines.iter().map(String::as_str), hour)
    } else {
        let records = read_records(&args.input.input)?;
        pipeline.run(&records, hour)
    };
    let Some(report) = report else {
        return Ok(());
    };
    if report.stats.malformed > 0 {
        tracing::warn!(count = report.stats.malformed, "Some input could not be parsed");
    }

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &report.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote report for {} - {} to {}",
                format_clock(report.window.start),
                format_clock(report.window.end),
                path.display()
            );
        }
        None => print!("{}", report.text),
    }
    Ok(())
}

/// Print the hour → window table.
pub fn handle_windows(config_path: Option<&Path>) -> Result<()> {
    let settings = load_config(config_path)?.settings()?;
    if settings.windows.is_empty() {
        println!("No reporting windows configured.");
        return Ok(());
    }
    println!("{:<6}{}", "Hour", "Window");
    for (hour, window) in settings.windows.iter() {
        println!(
            "{:<6}{} - {}",
            format!("{:02}", hour),
            format_clock(window.start),
            format_clock(window.end)
        );
    }
    Ok(())
}
