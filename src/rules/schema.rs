use serde::{Deserialize, Serialize};

/// How a format ranks competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Ranked by single; no average unless the event is grandfathered in.
    BestOf,
    /// Mean of all solves, nothing trimmed.
    Mean,
    /// Average after trimming best and worst solves.
    Average,
}

/// Computation policy for a round format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormatRule {
    pub id: String,
    pub kind: FormatKind,
    pub expected_solve_count: usize,

    /// How many best and how many worst solves are dropped before averaging
    #[serde(default)]
    pub trim_count: usize,
}

impl FormatRule {
    pub fn new(id: &str, kind: FormatKind, expected_solve_count: usize, trim_count: usize) -> Self {
        Self {
            id: id.to_string(),
            kind,
            expected_solve_count,
            trim_count,
        }
    }

    pub fn is_best_of(&self, count: usize) -> bool {
        self.kind == FormatKind::BestOf && self.expected_solve_count == count
    }

    /// Number of solves left after trimming.
    pub fn counting_solve_count(&self) -> usize {
        self.expected_solve_count.saturating_sub(2 * self.trim_count)
    }
}

/// Computation policy for an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EventRule {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Results are move counts rather than centiseconds
    #[serde(default)]
    pub uses_move_count: bool,

    #[serde(default)]
    pub max_move_count: Option<i64>,
}

impl EventRule {
    pub fn timed(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            uses_move_count: false,
            max_move_count: None,
        }
    }

    pub fn move_count(id: &str, name: &str, max_move_count: Option<i64>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            uses_move_count: true,
            max_move_count,
        }
    }
}
