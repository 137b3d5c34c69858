//! Categorization of tagged cue text, and parsing of encoded lines.

use std::sync::OnceLock;

use regex::Regex;

use super::{Category, FilterRule, Outcome, ScheduleItem, Tag};
use crate::clock;

const CREDIT_MARKER: &str = "(Credit Mention";
const INFO_MARKER: &str = "INFO-ED";
const INFO_PREFIX: &str = "INFO-ED -";
const INFO_LABEL: &str = "(INFO)";
const AD_MARKER: &str = "Ad -";

fn credit_mention() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\(Credit Mention - ([^)]+)\)\s*(\S.*)").expect("credit mention pattern")
    })
}

fn encoded_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}:\d{2}\s*[AaPp][Mm])\s+:\s(.*)$").expect("encoded line pattern")
    })
}

/// Decide the category of tagged text and clean its description.
///
/// Returns `None` for text that is neither a credit mention nor an ad.
pub fn categorize(text: &str) -> Option<(Category, String)> {
    if text.contains(CREDIT_MARKER) || text.starts_with(INFO_MARKER) {
        let description = match credit_mention().captures(text) {
            Some(caps) => format!("({}) {}", caps[1].trim(), caps[2].trim()),
            None => text.replace(INFO_PREFIX, INFO_LABEL).trim().to_string(),
        };
        return Some((Category::CreditMention, description));
    }

    text.strip_prefix(AD_MARKER)
        .map(|rest| (Category::Ad, rest.trim().to_string()))
}

/// Parse one `"<h:mm am/pm> : <text>"` line.
pub fn parse_line(line: &str) -> Outcome {
    let Some(caps) = encoded_line().captures(line) else {
        return Outcome::Malformed(format!("not a '<time> : <text>' line: {:?}", line));
    };
    let Some(start_time) = clock::parse_clock(&caps[1]) else {
        return Outcome::Malformed(format!("invalid time {:?}", &caps[1]));
    };

    let text = &caps[2];
    match categorize(text) {
        Some((category, description)) => Outcome::Classified(ScheduleItem {
            start_time,
            category,
            description,
        }),
        None if text.starts_with(Tag::Special.marker()) => Outcome::Filtered(FilterRule::Special),
        None => Outcome::Filtered(FilterRule::PlainMention),
    }
}

/// Parse encoded lines, keeping only classified items in input order.
pub fn parse_lines<'a, I>(lines: I) -> Vec<ScheduleItem>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| match parse_line(line) {
            Outcome::Classified(item) => Some(item),
            other => {
                tracing::debug!(line, outcome = ?other, "Skipping line");
                None
            }
        })
        .collect()
}
