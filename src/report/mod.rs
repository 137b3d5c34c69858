//! Time-windowed airplay reports.
//!
//! - [`window`] - Hour-of-day window table
//! - [`select`] - Window filter and description dedupe
//! - [`render`] - Text layout of report sections

pub mod render;
pub mod select;
pub mod window;

pub use render::{render_report, render_section, Layout};
pub use select::{select, Row};
pub use window::{current_hour, TimeWindow, WindowSpec, WindowTable};
