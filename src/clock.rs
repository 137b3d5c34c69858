//! 12-hour clock text used by window tables, encoded lines and reports.

use chrono::NaiveTime;

/// Parse 12-hour clock text such as `6:00 AM`, `7:46pm` or `12:05 am`.
///
/// Case and the space before the meridiem are ignored.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let upper = text.trim().to_ascii_uppercase();
    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest, "AM")
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest, "PM")
    } else {
        return None;
    };
    NaiveTime::parse_from_str(&format!("{} {}", clock.trim(), meridiem), "%I:%M %p").ok()
}

/// Format as `7:46 PM` (report columns and headers).
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format as `7:46pm` (encoded lines).
pub fn format_compact_clock(time: NaiveTime) -> String {
    time.format("%-I:%M%P").to_string()
}
