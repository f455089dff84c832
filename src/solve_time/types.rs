use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::rules::EventRule;

/// Encoded value of a DNF attempt, and of a DNF average.
pub const DNF_VALUE: i64 = -1;
/// Encoded value of a DNS attempt.
pub const DNS_VALUE: i64 = -2;
/// Encoded value of a skipped attempt, and of "no result" for best/average.
pub const SKIPPED_VALUE: i64 = 0;
/// Ranking value of DNF/DNS. Sorts after every real magnitude.
pub const INCOMPLETE_RANK: i64 = i64::MAX;
/// Number of attempt slots a result row has.
pub const MAX_ATTEMPTS: usize = 5;

/// Outcome of a single attempt.
///
/// `Completed` holds centiseconds for timed events and a move count for
/// move-count events. On the wire it uses the WCIF integer convention:
/// `-1` DNF, `-2` DNS, `0` skipped, positive values completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveTime {
    Completed(i64),
    Dnf,
    Dns,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveTimeError {
    #[error("must be positive (got {0})")]
    NonPositiveMagnitude(i64),

    #[error("must be at most {max} moves (got {moves})")]
    TooManyMoves { moves: i64, max: i64 },
}

impl SolveTime {
    pub fn from_encoded(value: i64) -> Self {
        match value {
            DNF_VALUE => SolveTime::Dnf,
            DNS_VALUE => SolveTime::Dns,
            SKIPPED_VALUE => SolveTime::Skipped,
            v => SolveTime::Completed(v),
        }
    }

    pub fn encoded(&self) -> i64 {
        match self {
            SolveTime::Completed(v) => *v,
            SolveTime::Dnf => DNF_VALUE,
            SolveTime::Dns => DNS_VALUE,
            SolveTime::Skipped => SKIPPED_VALUE,
        }
    }

    pub fn is_dns(&self) -> bool {
        matches!(self, SolveTime::Dns)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SolveTime::Skipped)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SolveTime::Completed(_))
    }

    /// DNF and DNS.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, SolveTime::Dnf | SolveTime::Dns)
    }

    pub fn is_unskipped(&self) -> bool {
        !self.is_skipped()
    }

    /// Value used when ranking attempts against each other.
    ///
    /// Incomplete attempts rank as [`INCOMPLETE_RANK`] so they always sort
    /// last. Skipped attempts have no ranking value at all.
    pub fn wca_value(&self) -> Option<i64> {
        match self {
            SolveTime::Completed(v) => Some(*v),
            SolveTime::Dnf | SolveTime::Dns => Some(INCOMPLETE_RANK),
            SolveTime::Skipped => None,
        }
    }

    /// Magnitude of a completed attempt.
    pub fn magnitude(&self) -> Option<i64> {
        match self {
            SolveTime::Completed(v) => Some(*v),
            _ => None,
        }
    }

    /// Check that this attempt is well-formed for `event`.
    pub fn check(&self, event: &EventRule) -> Result<(), SolveTimeError> {
        let SolveTime::Completed(v) = *self else {
            return Ok(());
        };
        // 0 encodes a skipped attempt, so a completed one must be above it
        if v <= 0 {
            return Err(SolveTimeError::NonPositiveMagnitude(v));
        }
        if event.uses_move_count {
            if let Some(max) = event.max_move_count {
                if v > max {
                    return Err(SolveTimeError::TooManyMoves { moves: v, max });
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for SolveTime {
    fn deserialize<D>(deserializer: D) -> Result<SolveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(SolveTimeVisitor)
    }
}

struct SolveTimeVisitor;

impl<'de> Visitor<'de> for SolveTimeVisitor {
    type Value = SolveTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer attempt result (-1 DNF, -2 DNS, 0 skipped)")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(SolveTime::from_encoded(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = i64::try_from(v).map_err(|_| E::custom(format!("attempt result {} is out of range", v)))?;
        Ok(SolveTime::from_encoded(v))
    }
}

impl Serialize for SolveTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.encoded())
    }
}
