//! Validation and recomputation of timed multi-attempt competition results.
//!
//! Given a result row (attempts, event, format, stored best/average), the
//! crate recomputes best and average from scratch and reports every rule the
//! row breaks. Rules for events and formats are looked up through the
//! [`rules::EventLookup`] / [`rules::FormatLookup`] traits so callers can
//! plug in their own repositories; [`rules::RuleBook`] is the built-in one.

pub mod config;
pub mod logging;
pub mod output;
pub mod rules;
pub mod scoring;
pub mod solve_time;

pub use rules::{EventLookup, EventRule, FormatKind, FormatLookup, FormatRule, LegacyAverageTable, RuleBook, RuleLookup};
pub use scoring::{compute_average, compute_best, validate, validate_with, ResultRecord, ValidationError};
pub use solve_time::{format_solve_time, parse_solve_time, SolveTime};
