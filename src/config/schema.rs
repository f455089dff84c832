use serde::{Deserialize, Serialize};

use crate::rules::{EventRule, FormatRule, LegacyAverageTable};

/// Rules file layout.
///
/// Example YAML:
/// ```yaml
/// formats:
///   - { id: "5", kind: best_of, expected_solve_count: 5 }
/// events:
///   - { id: "333mts", name: "3x3x3 Match the scramble" }
/// legacy_average_events: ["333fm", "333bf", "444bf", "555bf", "333ft"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Formats added to, or replacing by id, the built-in ones
    #[serde(default)]
    pub formats: Vec<FormatRule>,

    /// Events added to, or replacing by id, the built-in ones
    #[serde(default)]
    pub events: Vec<EventRule>,

    /// Replaces the whole legacy best-of-3 average table when present
    #[serde(default)]
    pub legacy_average_events: Option<LegacyAverageTable>,

    /// Start from an empty rule book instead of the built-in one
    #[serde(default)]
    pub replace_builtin: bool,
}
