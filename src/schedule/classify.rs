//! Title rewriting and duration-based tagging.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{categorize, FilterRule, Outcome, ScheduleItem};
use crate::clock;
use crate::cue::NormalizedRecord;

/// Marker the playout system uses for sponsor credits inside a title.
const CREDIT_TOKEN: &str = "CM/";
const CREDIT_MARKER: &str = "Credit Mention - ";

/// Duration thresholds in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Cues shorter than this are dropped
    pub lead_in_secs: u64,
    /// Cues of exactly this length are tagged as ads
    pub ad_secs: u64,
    /// Cues longer than this are tagged special
    pub special_secs: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            lead_in_secs: 10,
            ad_secs: 30,
            special_secs: 45,
        }
    }
}

/// Duration tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Plain,
    Ad,
    Special,
}

impl Tag {
    /// Tag for a duration. Ads match exactly; 29s and 31s stay plain.
    pub fn for_duration(duration_secs: u64, thresholds: &Thresholds) -> Self {
        if duration_secs > thresholds.special_secs {
            Self::Special
        } else if duration_secs == thresholds.ad_secs {
            Self::Ad
        } else {
            Self::Plain
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Ad => "Ad -",
            Self::Special => "Special -",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A cue that passed the lead-in threshold, with its rewritten title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub start_local: NaiveDateTime,
    pub tag: Tag,
    pub title: String,
}

impl Classification {
    /// Tagged text: `Ad - TITLE`, `Special - TITLE` or the bare title.
    pub fn text(&self) -> String {
        match self.tag {
            Tag::Plain => self.title.clone(),
            tag => format!("{} {}", tag, self.title),
        }
    }

    /// `"7:46pm : Ad - TITLE"`
    pub fn encoded_line(&self) -> String {
        format!(
            "{} : {}",
            clock::format_compact_clock(self.start_local.time()),
            self.text()
        )
    }

    pub fn into_outcome(self) -> Outcome {
        match categorize(&self.text()) {
            Some((category, description)) => Outcome::Classified(ScheduleItem {
                start_time: self.start_local.time(),
                category,
                description,
            }),
            None if self.tag == Tag::Special => Outcome::Filtered(FilterRule::Special),
            None => Outcome::Filtered(FilterRule::PlainMention),
        }
    }
}

fn sponsor_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\$SPON\s*-?\s*").expect("sponsor prefix pattern"))
}

/// Expand `CM/` credit tokens and strip the `$SPON - ` sponsor prefix.
pub fn rewrite_title(title: &str) -> String {
    let expanded = title.replace(CREDIT_TOKEN, CREDIT_MARKER);
    sponsor_prefix().replace(&expanded, "").into_owned()
}

/// Tag a normalized record, or say why it was dropped.
pub fn classify(record: &NormalizedRecord, thresholds: &Thresholds) -> Result<Classification, FilterRule> {
    if record.duration_secs < thresholds.lead_in_secs {
        return Err(FilterRule::BelowLeadIn {
            duration_secs: record.duration_secs,
        });
    }

    Ok(Classification {
        start_local: record.start_local,
        tag: Tag::for_duration(record.duration_secs, thresholds),
        title: rewrite_title(&record.title),
    })
}
