//! Window filtering and description deduplication.

use std::collections::HashSet;

use chrono::NaiveTime;

use super::TimeWindow;
use crate::schedule::{Category, ScheduleItem};

/// A report row: air time and description.
pub type Row = (NaiveTime, String);

/// Select items of `category` inside `window`, dedupe, then sort by time.
///
/// **Algorithm**:
/// 1. Keep items of the category whose start lies in `[start, end)`
/// 2. Drop repeated descriptions; the first in input order is kept, even if
///    a later duplicate aired earlier
/// 3. Stable sort the survivors by start time
pub fn select(items: &[ScheduleItem], window: &TimeWindow, category: Category) -> Vec<Row> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<Row> = Vec::new();

    for item in items {
        if item.category != category || !window.contains(item.start_time) {
            continue;
        }
        if seen.insert(item.description.as_str()) {
            rows.push((item.start_time, item.description.clone()));
        }
    }

    rows.sort_by_key(|(time, _)| *time);
    rows
}
