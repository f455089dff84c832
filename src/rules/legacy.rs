use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Events whose best-of-3 rounds still get an average computed.
///
/// `333fm` and `333ft` moved from best of 3 to mean of 3 in late 2013, and
/// means were computed for all of their old best-of-3 rounds without changing
/// the rounds' format. Blindfolded events are ranked by single, but records
/// are awarded on both single and mean of 3 (regulation 9b3b).
pub const DEFAULT_LEGACY_AVERAGE_EVENTS: &[&str] = &["333ft", "333fm", "333bf", "444bf", "555bf"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LegacyAverageTable {
    events: BTreeSet<String>,
}

impl LegacyAverageTable {
    pub fn new<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.events.contains(event_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for LegacyAverageTable {
    fn default() -> Self {
        Self::new(DEFAULT_LEGACY_AVERAGE_EVENTS.iter().copied())
    }
}
