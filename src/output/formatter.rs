use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::rules::EventRule;
use crate::scoring::{ResultRecord, ValidationError};
use crate::solve_time::{format_result_value, ResultKind};

/// A record with the errors validation found on it
pub struct RecordReport<'a> {
    pub record: &'a ResultRecord,
    pub errors: Vec<ValidationError>,
}

impl RecordReport<'_> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    label: String,
    event_id: &'a str,
    format_id: &'a str,
    valid: bool,
    errors: &'a [ValidationError],
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format validation reports, one block per record, followed by a summary line.
///
/// Valid records take a single line; invalid ones list their errors indented
/// underneath.
pub fn format_report(reports: &[RecordReport], use_colors: bool) -> String {
    if reports.is_empty() {
        return "No results found.".to_string();
    }

    let mut lines = Vec::new();
    for (idx, report) in reports.iter().enumerate() {
        let index_str = format!("{:>3}.", idx + 1);
        let label = report.record.display_label();

        let status = if report.is_valid() { "ok" } else { "INVALID" };
        if use_colors {
            let status = if report.is_valid() {
                status.green().to_string()
            } else {
                status.red().bold().to_string()
            };
            lines.push(format!("{} {}  {}", index_str.dimmed(), status, label));
        } else {
            lines.push(format!("{} {}  {}", index_str, status, label));
        }

        for error in &report.errors {
            if use_colors {
                lines.push(format!("       {} {}", "-".dimmed(), error.full_message().yellow()));
            } else {
                lines.push(format!("       - {}", error.full_message()));
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    lines.push(String::new());
    lines.push(format!("{} of {} results invalid", invalid, reports.len()));
    lines.join("\n")
}

/// Format validation reports as a JSON array for scripting
pub fn format_json(reports: &[RecordReport]) -> serde_json::Result<String> {
    let json: Vec<JsonReport> = reports
        .iter()
        .map(|report| JsonReport {
            label: report.record.display_label(),
            event_id: &report.record.event_id,
            format_id: &report.record.format_id,
            valid: report.is_valid(),
            errors: &report.errors,
        })
        .collect();
    serde_json::to_string_pretty(&json)
}

/// Format computed best/average, showing both the stored integer and its display.
pub fn format_computed(best: i64, average: i64, event: &EventRule) -> String {
    let best_display = format_result_value(best, event, ResultKind::Single);
    let average_display = format_result_value(average, event, ResultKind::Average);
    format!(
        "best:    {:>8}  {}\naverage: {:>8}  {}",
        best, best_display, average, average_display
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Field, ValidationErrorKind};
    use crate::solve_time::SolveTime;

    fn sample_record() -> ResultRecord {
        let mut record = ResultRecord::new(
            "333",
            "a",
            vec![
                SolveTime::Completed(1200),
                SolveTime::Dnf,
                SolveTime::Completed(1152),
                SolveTime::Completed(1300),
                SolveTime::Completed(1250),
            ],
        );
        record.label = Some("Jane Doe".to_string());
        record
    }

    fn mismatch() -> ValidationError {
        ValidationError::new(
            Field::Average,
            ValidationErrorKind::AverageMismatch { correct: 1250, stored: 1200 },
        )
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_report(&[], false), "No results found.");
    }

    #[test]
    fn test_format_report_plain() {
        let record = sample_record();
        let reports = vec![
            RecordReport { record: &record, errors: vec![] },
            RecordReport { record: &record, errors: vec![mismatch()] },
        ];
        let output = format_report(&reports, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  1. ok  Jane Doe");
        assert_eq!(lines[1], "  2. INVALID  Jane Doe");
        assert_eq!(lines[2], "       - Average should be 1250");
        assert_eq!(lines.last(), Some(&"1 of 2 results invalid"));
    }

    #[test]
    fn test_format_report_colored_keeps_messages() {
        let record = sample_record();
        let reports = vec![RecordReport { record: &record, errors: vec![mismatch()] }];
        let output = format_report(&reports, true);
        assert!(output.contains("Average should be 1250"));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_format_json() {
        let record = sample_record();
        let reports = vec![RecordReport { record: &record, errors: vec![mismatch()] }];
        let json = format_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["label"], "Jane Doe");
        assert_eq!(value[0]["valid"], false);
        assert_eq!(value[0]["errors"][0]["field"], "average");
        assert_eq!(value[0]["errors"][0]["message"], "should be 1250");
    }

    #[test]
    fn test_format_computed() {
        let event = EventRule::move_count("333fm", "3x3x3 Fewest Moves", Some(80));
        let output = format_computed(25, 2600, &event);
        assert!(output.contains("25  25"));
        assert!(output.contains("2600  26.00"));
    }
}
