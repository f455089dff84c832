pub mod formatter;

pub use formatter::{format_computed, format_json, format_report, should_use_colors, RecordReport};
