use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::solve_time::SolveTimeError;

/// Attribute a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The row as a whole
    Base,
    Event,
    Format,
    /// 1-based attempt slot
    Value(usize),
    Best,
    Average,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Base => f.write_str("base"),
            Field::Event => f.write_str("event"),
            Field::Format => f.write_str("format"),
            Field::Value(i) => write!(f, "value{}", i),
            Field::Best => f.write_str("best"),
            Field::Average => f.write_str("average"),
        }
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveCountError {
    #[error("Invalid format")]
    InvalidFormat,

    #[error("Expected at most {max} attempts, but found {found}")]
    TooManyAttempts { max: usize, found: usize },

    #[error("All solves cannot be DNS/skipped")]
    AllDnsOrSkipped,

    #[error("Expected {}, but found {found}", pluralize(.expected, "solve"))]
    WrongCount { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("must exist")]
    MissingAssociation,

    #[error("{0}")]
    InvalidSolveCount(SolveCountError),

    #[error("Skipped solves must all come at the end")]
    InvalidSolveOrdering,

    #[error("{0}")]
    InvalidIndividualSolve(SolveTimeError),

    #[error("should be {correct}")]
    AverageMismatch { correct: i64, stored: i64 },

    #[error("should be {correct}")]
    BestMismatch { correct: i64, stored: i64 },
}

/// One failed check on a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Message prefixed with the field name, e.g. "Average should be 2600".
    /// Errors on the row as a whole are returned as-is.
    pub fn full_message(&self) -> String {
        match self.field {
            Field::Base => self.message(),
            field => format!("{} {}", capitalize(&field.to_string()), self.message()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

fn pluralize(count: &usize, word: &str) -> String {
    if *count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
