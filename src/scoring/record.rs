use serde::{Deserialize, Serialize};

use crate::solve_time::SolveTime;

/// One competitor's row in a round, as submitted.
///
/// `best` and `average` are what the submitter claims; validation recomputes
/// both from `attempts` and never trusts them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResultRecord {
    /// Free-form identifier used in reports (competitor name, WCA id, row id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub event_id: String,
    pub format_id: String,
    pub attempts: Vec<SolveTime>,

    #[serde(default)]
    pub best: i64,

    #[serde(default)]
    pub average: i64,

    /// Competitor did not make the cutoff of a combined round
    #[serde(default)]
    pub missed_combined_round_cutoff: bool,
}

impl ResultRecord {
    pub fn new(event_id: &str, format_id: &str, attempts: Vec<SolveTime>) -> Self {
        Self {
            label: None,
            event_id: event_id.to_string(),
            format_id: format_id.to_string(),
            attempts,
            best: 0,
            average: 0,
            missed_combined_round_cutoff: false,
        }
    }

    pub fn with_stored(mut self, best: i64, average: i64) -> Self {
        self.best = best;
        self.average = average;
        self
    }

    /// Label for reports, falling back to the event/format pair.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} ({})", self.event_id, self.format_id))
    }
}
