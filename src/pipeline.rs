//! End-to-end report pipeline.
//!
//! Raw records are ordered by start time, classified one by one into
//! [`Outcome`]s, and the classified items are rendered for the window that
//! the requested hour maps to. Every stage is a pure function of its input,
//! so the same records and hour always give byte-identical text.

use crate::config::Settings;
use crate::cue::{self, RawCueRecord};
use crate::report::{render_report, TimeWindow};
use crate::schedule::{self, FilterRule, Outcome, ScheduleItem};

/// Per-outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub records: usize,
    pub classified: usize,
    pub below_lead_in: usize,
    pub special: usize,
    pub plain: usize,
    pub malformed: usize,
}

impl PipelineStats {
    fn count(&mut self, outcome: &Outcome) {
        self.records += 1;
        match outcome {
            Outcome::Classified(_) => self.classified += 1,
            Outcome::Filtered(FilterRule::BelowLeadIn { .. }) => self.below_lead_in += 1,
            Outcome::Filtered(FilterRule::Special) => self.special += 1,
            Outcome::Filtered(FilterRule::PlainMention) => self.plain += 1,
            Outcome::Malformed(_) => self.malformed += 1,
        }
    }
}

/// One record's path through the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueTrace {
    pub record: RawCueRecord,
    /// `None` when the record was dropped before encoding
    pub encoded_line: Option<String>,
    pub outcome: Outcome,
}

/// A rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub hour: u32,
    pub window: TimeWindow,
    pub stats: PipelineStats,
    pub text: String,
}

/// Classification and reporting with a fixed set of settings.
#[derive(Debug, Clone)]
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Window for an hour of day, `None` during quiet periods.
    pub fn window_for(&self, hour: u32) -> Option<TimeWindow> {
        self.settings.windows.lookup(hour).copied()
    }

    /// Outcome of every record, in start-time order.
    pub fn classify(&self, records: &[RawCueRecord]) -> Vec<Outcome> {
        cue::order_records(records)
            .iter()
            .map(|record| {
                let outcome =
                    schedule::classify_record(record, self.settings.offset, &self.settings.thresholds);
                log_outcome(record, &outcome);
                outcome
            })
            .collect()
    }

    /// Like [`Pipeline::classify`], keeping the record and its encoded line.
    pub fn trace(&self, records: &[RawCueRecord]) -> Vec<CueTrace> {
        cue::order_records(records)
            .into_iter()
            .map(|record| {
                let encoded_line = cue::normalize(&record, self.settings.offset)
                    .ok()
                    .and_then(|normalized| {
                        schedule::classify(&normalized, &self.settings.thresholds).ok()
                    })
                    .map(|classification| classification.encoded_line());
                let outcome =
                    schedule::classify_record(&record, self.settings.offset, &self.settings.thresholds);
                CueTrace {
                    record,
                    encoded_line,
                    outcome,
                }
            })
            .collect()
    }

    /// Schedule items in start-time order.
    pub fn items(&self, records: &[RawCueRecord]) -> Vec<ScheduleItem> {
        self.classify(records)
            .into_iter()
            .filter_map(Outcome::into_item)
            .collect()
    }

    /// Build the report for `hour`, or `None` if the hour has no window.
    pub fn run(&self, records: &[RawCueRecord], hour: u32) -> Option<Report> {
        let window = self.window_for_run(hour)?;
        Some(self.render(self.classify(records), window, hour))
    }

    /// Build the report from previously encoded `"<time> : <text>"` lines.
    /// Blank lines are skipped and not counted.
    pub fn run_lines<'a, I>(&self, lines: I, hour: u32) -> Option<Report>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let window = self.window_for_run(hour)?;
        let outcomes = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let outcome = schedule::parse_line(line);
                if let Outcome::Malformed(reason) = &outcome {
                    tracing::debug!(%reason, "Skipping line");
                }
                outcome
            })
            .collect();
        Some(self.render(outcomes, window, hour))
    }

    fn window_for_run(&self, hour: u32) -> Option<TimeWindow> {
        let window = self.window_for(hour);
        if window.is_none() {
            tracing::info!(hour, "No reporting window for this hour");
        }
        window
    }

    fn render(&self, outcomes: Vec<Outcome>, window: TimeWindow, hour: u32) -> Report {
        let mut stats = PipelineStats::default();
        for outcome in &outcomes {
            stats.count(outcome);
        }
        let items: Vec<ScheduleItem> = outcomes.into_iter().filter_map(Outcome::into_item).collect();
        let text = render_report(&items, &window);

        tracing::info!(
            hour,
            window_start = %window.start,
            window_end = %window.end,
            records = stats.records,
            classified = stats.classified,
            malformed = stats.malformed,
            "Report generated"
        );

        Report {
            hour,
            window,
            stats,
            text,
        }
    }
}

fn log_outcome(record: &RawCueRecord, outcome: &Outcome) {
    match outcome {
        Outcome::Classified(item) => {
            tracing::debug!(category = %item.category, description = %item.description, "Classified");
        }
        Outcome::Filtered(rule) => {
            tracing::debug!(title = %record.title, %rule, "Filtered");
        }
        Outcome::Malformed(reason) => {
            tracing::warn!(title = %record.title, %reason, "Malformed record");
        }
    }
}
