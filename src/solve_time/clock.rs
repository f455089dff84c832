use thiserror::Error;

use super::types::{SolveTime, DNF_VALUE, DNS_VALUE, SKIPPED_VALUE};
use crate::rules::EventRule;

const CENTIS_PER_SECOND: u64 = 100;
const CENTIS_PER_MINUTE: u64 = 60 * CENTIS_PER_SECOND;
const CENTIS_PER_HOUR: u64 = 60 * CENTIS_PER_MINUTE;

/// Whether an encoded value is a single attempt or an average.
///
/// Only matters for move-count events, whose averages are stored with two
/// implied decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Single,
    Average,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a move count")]
    InvalidMoveCount(String),

    #[error("'{0}' is not a time; expected [[h:]m:]s.cc")]
    InvalidTime(String),

    #[error("'{0}' is zero; leave the attempt empty to skip it")]
    ZeroResult(String),

    #[error("{component} must be below 60 in '{input}'")]
    ComponentOutOfRange { component: &'static str, input: String },
}

/// Canonical display of one attempt.
///
/// DNF/DNS print as such, skipped attempts print as an empty string, move
/// counts print as integers and times print as `h:mm:ss.cc` with leading zero
/// components dropped.
pub fn format_solve_time(solve_time: &SolveTime, event: &EventRule) -> String {
    match solve_time {
        SolveTime::Dnf => "DNF".to_string(),
        SolveTime::Dns => "DNS".to_string(),
        SolveTime::Skipped => String::new(),
        SolveTime::Completed(v) if event.uses_move_count => v.to_string(),
        SolveTime::Completed(v) => format_clock(*v),
    }
}

/// Display a stored best/average value.
pub fn format_result_value(value: i64, event: &EventRule, kind: ResultKind) -> String {
    match value {
        DNF_VALUE => "DNF".to_string(),
        DNS_VALUE => "DNS".to_string(),
        SKIPPED_VALUE => String::new(),
        v if event.uses_move_count => match kind {
            ResultKind::Single => v.to_string(),
            ResultKind::Average => {
                let sign = if v < 0 { "-" } else { "" };
                let abs = v.unsigned_abs();
                format!("{}{}.{:02}", sign, abs / 100, abs % 100)
            }
        },
        v => format_clock(v),
    }
}

/// Format centiseconds as a clock string, e.g. `1:05.32`.
pub fn format_clock(centiseconds: i64) -> String {
    let sign = if centiseconds < 0 { "-" } else { "" };
    let total = centiseconds.unsigned_abs();

    let hours = total / CENTIS_PER_HOUR;
    let minutes = (total % CENTIS_PER_HOUR) / CENTIS_PER_MINUTE;
    let seconds = (total % CENTIS_PER_MINUTE) / CENTIS_PER_SECOND;
    let centis = total % CENTIS_PER_SECOND;

    if hours > 0 {
        format!("{}{}:{:02}:{:02}.{:02}", sign, hours, minutes, seconds, centis)
    } else if minutes > 0 {
        format!("{}{}:{:02}.{:02}", sign, minutes, seconds, centis)
    } else {
        format!("{}{}.{:02}", sign, seconds, centis)
    }
}

/// Parse a typed-in attempt for `event`.
///
/// Accepts `DNF`, `DNS`, `skip` or an empty string, and otherwise a move
/// count or a clock string depending on the event's units.
pub fn parse_solve_time(input: &str, event: &EventRule) -> Result<SolveTime, ParseError> {
    let s = input.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("skip") {
        return Ok(SolveTime::Skipped);
    }
    if s.eq_ignore_ascii_case("dnf") {
        return Ok(SolveTime::Dnf);
    }
    if s.eq_ignore_ascii_case("dns") {
        return Ok(SolveTime::Dns);
    }

    let value = if event.uses_move_count {
        if !is_digits(s) {
            return Err(ParseError::InvalidMoveCount(s.to_string()));
        }
        s.parse()
            .map_err(|_| ParseError::InvalidMoveCount(s.to_string()))?
    } else {
        parse_clock(s)?
    };

    // 0 is the encoding of a skipped attempt
    if value == 0 {
        return Err(ParseError::ZeroResult(s.to_string()));
    }
    Ok(SolveTime::Completed(value))
}

fn parse_clock(s: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidTime(s.to_string());

    let (whole, centis) = s.split_once('.').ok_or_else(invalid)?;
    if centis.len() != 2 || !is_digits(centis) {
        return Err(invalid());
    }

    let parts: Vec<&str> = whole.split(':').collect();
    if parts.len() > 3 || parts.iter().any(|p| !is_digits(p)) {
        return Err(invalid());
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        values.push(part.parse::<u64>().map_err(|_| invalid())?);
    }

    // Components below the leading one are bounded by 60
    let names = ["seconds", "minutes"];
    for (i, value) in values.iter().rev().enumerate().take(values.len() - 1) {
        if *value >= 60 {
            return Err(ParseError::ComponentOutOfRange {
                component: names[i],
                input: s.to_string(),
            });
        }
    }

    let unit_sizes = [CENTIS_PER_SECOND, CENTIS_PER_MINUTE, CENTIS_PER_HOUR];
    let mut total: u64 = centis.parse().map_err(|_| invalid())?;
    for (value, unit) in values.iter().rev().zip(unit_sizes) {
        total = value
            .checked_mul(unit)
            .and_then(|v| v.checked_add(total))
            .ok_or_else(invalid)?;
    }
    i64::try_from(total).map_err(|_| invalid())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
