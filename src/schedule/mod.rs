//! Classification of cues into reportable schedule items.
//!
//! # Flow
//!
//! 1. [`classify`] rewrites the title and tags the cue by duration
//! 2. [`categorize`] decides whether the tagged text is a credit mention or
//!    an ad and cleans up the description
//! 3. The result is an [`Outcome`] saying whether the cue became a
//!    [`ScheduleItem`], which rule filtered it, or why it was malformed
//!
//! The same categorization backs [`parse_line`], which re-reads the textual
//! `"<time> : <text>"` form produced by [`Classification::encoded_line`].

mod classify;
mod parse;

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveTime};

use crate::cue::{self, RawCueRecord};

pub use classify::{classify, rewrite_title, Classification, Tag, Thresholds};
pub use parse::{categorize, parse_line, parse_lines};

/// Report category of a schedule item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CreditMention,
    Ad,
}

impl Category {
    /// Both categories in report order.
    pub const ALL: [Category; 2] = [Category::CreditMention, Category::Ad];

    /// Label used in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditMention => "Credit Mention",
            Self::Ad => "Ad",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}' (expected 'credit mention' or 'ad')")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "creditmention" | "cm" => Ok(Self::CreditMention),
            "ad" | "ads" => Ok(Self::Ad),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A credit mention or ad aired at a time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub start_time: NaiveTime,
    pub category: Category,
    pub description: String,
}

/// Rule that kept a well-formed cue out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Shorter than the lead-in threshold (crossfade noise, station idents).
    BelowLeadIn { duration_secs: u64 },
    /// Tagged special and carrying no credit mention marker.
    Special,
    /// Neither a credit mention nor an ad.
    PlainMention,
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowLeadIn { duration_secs } => {
                write!(f, "below lead-in ({}s)", duration_secs)
            }
            Self::Special => f.write_str("special"),
            Self::PlainMention => f.write_str("plain mention"),
        }
    }
}

/// What became of one cue or encoded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Classified(ScheduleItem),
    Filtered(FilterRule),
    Malformed(String),
}

impl Outcome {
    pub fn item(&self) -> Option<&ScheduleItem> {
        match self {
            Self::Classified(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_item(self) -> Option<ScheduleItem> {
        match self {
            Self::Classified(item) => Some(item),
            _ => None,
        }
    }
}

/// Normalize, classify and categorize one raw record.
pub fn classify_record(raw: &RawCueRecord, offset: FixedOffset, thresholds: &Thresholds) -> Outcome {
    let record = match cue::normalize(raw, offset) {
        Ok(record) => record,
        Err(e) => return Outcome::Malformed(e.to_string()),
    };
    match classify(&record, thresholds) {
        Ok(classification) => classification.into_outcome(),
        Err(rule) => Outcome::Filtered(rule),
    }
}
