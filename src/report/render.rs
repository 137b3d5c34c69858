//! Plain-text report sections.

use super::select::{select, Row};
use super::TimeWindow;
use crate::clock::format_clock;
use crate::schedule::{Category, ScheduleItem};

const TIME_WIDTH: usize = 10;
const DESCRIPTION_WIDTH: usize = 70;
const EMPTY_MESSAGE: &str = "No items found";

/// Section layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Column header and a time column
    Full,
    /// Descriptions only, for pasting into messages
    Compact,
}

/// Render one section for already selected rows.
pub fn render_section(rows: &[Row], window: &TimeWindow, category: Category, layout: Layout) -> String {
    let mut output = format!(
        "From {} to {} - {}\n",
        format_clock(window.start),
        format_clock(window.end),
        category
    );

    if rows.is_empty() {
        output.push_str(EMPTY_MESSAGE);
        output.push('\n');
    } else {
        match layout {
            Layout::Full => {
                let rule = "-".repeat(TIME_WIDTH + DESCRIPTION_WIDTH);
                output.push_str(&rule);
                output.push('\n');
                output.push_str(&format!(
                    "{:<tw$}{:<dw$}\n",
                    "Time",
                    "Description",
                    tw = TIME_WIDTH,
                    dw = DESCRIPTION_WIDTH
                ));
                output.push_str(&rule);
                output.push('\n');
                for (time, description) in rows {
                    output.push_str(&format!(
                        "{:<tw$}{:<dw$}\n",
                        format_clock(*time),
                        description,
                        tw = TIME_WIDTH,
                        dw = DESCRIPTION_WIDTH
                    ));
                }
            }
            Layout::Compact => {
                for (_, description) in rows {
                    output.push_str(&format!("{:<dw$}\n", description, dw = DESCRIPTION_WIDTH));
                }
            }
        }
    }

    output.push('\n');
    output
}

/// Full report: compact credit mentions, compact ads, then full credit
/// mentions and full ads, all over the same window.
pub fn render_report(items: &[ScheduleItem], window: &TimeWindow) -> String {
    let mut output = String::new();
    for layout in [Layout::Compact, Layout::Full] {
        for category in Category::ALL {
            let rows = select(items, window, category);
            output.push_str(&render_section(&rows, window, category, layout));
        }
    }
    output
}
