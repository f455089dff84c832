use std::collections::HashSet;

use super::schema::RulesConfig;
use crate::rules::FormatKind;
use crate::solve_time::MAX_ATTEMPTS;

/// Validate a rules file after parsing.
/// Returns all validation errors at once (not just the first).
pub fn validate_rules(config: &RulesConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut format_ids = HashSet::new();
    for (i, format) in config.formats.iter().enumerate() {
        if format.id.trim().is_empty() {
            errors.push(format!("formats[{}].id: must not be empty", i));
        } else if !format_ids.insert(format.id.as_str()) {
            errors.push(format!("formats[{}].id: duplicate id '{}'", i, format.id));
        }

        if format.expected_solve_count == 0 || format.expected_solve_count > MAX_ATTEMPTS {
            errors.push(format!(
                "formats[{}].expected_solve_count: must be between 1 and {} (got {})",
                i, MAX_ATTEMPTS, format.expected_solve_count
            ));
        }

        if format.kind == FormatKind::BestOf && format.trim_count != 0 {
            errors.push(format!("formats[{}].trim_count: best_of formats cannot trim", i));
        } else if format.counting_solve_count() == 0 {
            errors.push(format!(
                "formats[{}].trim_count: trimming {} from each end leaves no counting solves",
                i, format.trim_count
            ));
        }
    }

    let mut event_ids = HashSet::new();
    for (i, event) in config.events.iter().enumerate() {
        if event.id.trim().is_empty() {
            errors.push(format!("events[{}].id: must not be empty", i));
        } else if !event_ids.insert(event.id.as_str()) {
            errors.push(format!("events[{}].id: duplicate id '{}'", i, event.id));
        }

        if let Some(max) = event.max_move_count {
            if !event.uses_move_count {
                errors.push(format!(
                    "events[{}].max_move_count: only applies when uses_move_count is true",
                    i
                ));
            } else if max <= 0 {
                errors.push(format!("events[{}].max_move_count: must be positive", i));
            }
        }
    }

    if let Some(ref table) = config.legacy_average_events {
        if table.iter().any(|id| id.trim().is_empty()) {
            errors.push("legacy_average_events: ids must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
