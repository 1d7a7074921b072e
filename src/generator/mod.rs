//! Text report generator module.

mod report;

pub use report::{format_length, generate_cut_report, generate_lesson_outline, ReportOptions};
