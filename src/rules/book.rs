use std::collections::BTreeMap;

use super::legacy::LegacyAverageTable;
use super::schema::{EventRule, FormatKind, FormatRule};
use super::{EventLookup, FormatLookup, RuleLookup};

/// In-memory rule repository.
///
/// Built once (from the built-in tables, optionally overlaid with a rules
/// file) and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBook {
    formats: BTreeMap<String, FormatRule>,
    events: BTreeMap<String, EventRule>,
    legacy_average_events: LegacyAverageTable,
}

impl RuleBook {
    /// A rule book with no formats and no events.
    pub fn empty() -> Self {
        Self {
            formats: BTreeMap::new(),
            events: BTreeMap::new(),
            legacy_average_events: LegacyAverageTable::default(),
        }
    }

    pub fn builtin() -> Self {
        let mut book = Self::empty();
        for format in builtin_formats() {
            book.insert_format(format);
        }
        for event in builtin_events() {
            book.insert_event(event);
        }
        book
    }

    /// Insert or replace a format by id.
    pub fn insert_format(&mut self, format: FormatRule) {
        self.formats.insert(format.id.clone(), format);
    }

    /// Insert or replace an event by id.
    pub fn insert_event(&mut self, event: EventRule) {
        self.events.insert(event.id.clone(), event);
    }

    pub fn set_legacy_average_events(&mut self, table: LegacyAverageTable) {
        self.legacy_average_events = table;
    }

    pub fn formats(&self) -> impl Iterator<Item = &FormatRule> {
        self.formats.values()
    }

    pub fn events(&self) -> impl Iterator<Item = &EventRule> {
        self.events.values()
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EventLookup for RuleBook {
    fn lookup_event(&self, id: &str) -> Option<&EventRule> {
        self.events.get(id)
    }
}

impl FormatLookup for RuleBook {
    fn lookup_format(&self, id: &str) -> Option<&FormatRule> {
        self.formats.get(id)
    }
}

impl RuleLookup for RuleBook {
    fn legacy_average_events(&self) -> &LegacyAverageTable {
        &self.legacy_average_events
    }
}

fn builtin_formats() -> Vec<FormatRule> {
    vec![
        FormatRule::new("1", FormatKind::BestOf, 1, 0),
        FormatRule::new("2", FormatKind::BestOf, 2, 0),
        FormatRule::new("3", FormatKind::BestOf, 3, 0),
        FormatRule::new("a", FormatKind::Average, 5, 1),
        FormatRule::new("m", FormatKind::Mean, 3, 0),
    ]
}

fn builtin_events() -> Vec<EventRule> {
    vec![
        EventRule::timed("333", "3x3x3 Cube"),
        EventRule::timed("222", "2x2x2 Cube"),
        EventRule::timed("444", "4x4x4 Cube"),
        EventRule::timed("555", "5x5x5 Cube"),
        EventRule::timed("666", "6x6x6 Cube"),
        EventRule::timed("777", "7x7x7 Cube"),
        EventRule::timed("333bf", "3x3x3 Blindfolded"),
        EventRule::move_count("333fm", "3x3x3 Fewest Moves", Some(80)),
        EventRule::timed("333oh", "3x3x3 One-Handed"),
        EventRule::timed("clock", "Clock"),
        EventRule::timed("minx", "Megaminx"),
        EventRule::timed("pyram", "Pyraminx"),
        EventRule::timed("skewb", "Skewb"),
        EventRule::timed("sq1", "Square-1"),
        EventRule::timed("444bf", "4x4x4 Blindfolded"),
        EventRule::timed("555bf", "5x5x5 Blindfolded"),
        EventRule::timed("333ft", "3x3x3 With Feet"),
    ]
}
