pub mod book;
pub mod legacy;
pub mod schema;

pub use book::RuleBook;
pub use legacy::{LegacyAverageTable, DEFAULT_LEGACY_AVERAGE_EVENTS};
pub use schema::{EventRule, FormatKind, FormatRule};

/// Read-only source of event rules.
pub trait EventLookup {
    fn lookup_event(&self, id: &str) -> Option<&EventRule>;
}

/// Read-only source of format rules.
pub trait FormatLookup {
    fn lookup_format(&self, id: &str) -> Option<&FormatRule>;
}

/// Everything validation needs to resolve a result row.
pub trait RuleLookup: EventLookup + FormatLookup {
    fn legacy_average_events(&self) -> &LegacyAverageTable;
}
