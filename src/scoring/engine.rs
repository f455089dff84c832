use super::errors::{SolveCountError, ValidationErrorKind};
use crate::rules::{EventRule, FormatKind, FormatRule, LegacyAverageTable};
use crate::solve_time::{SolveTime, DNF_VALUE, MAX_ATTEMPTS};

/// Averages strictly above this many centiseconds are rounded to the second
/// (regulation 9f2).
pub const SECOND_ROUNDING_THRESHOLD: i64 = 60_000;

/// Check the number and ordering of attempts against `format`.
///
/// Returns the first failing reason. A missing format fails immediately.
pub fn check_solve_count(
    attempts: &[SolveTime],
    format: Option<&FormatRule>,
) -> Result<(), ValidationErrorKind> {
    let Some(format) = format else {
        return Err(ValidationErrorKind::InvalidSolveCount(SolveCountError::InvalidFormat));
    };

    if attempts.len() > MAX_ATTEMPTS {
        return Err(ValidationErrorKind::InvalidSolveCount(
            SolveCountError::TooManyAttempts {
                max: MAX_ATTEMPTS,
                found: attempts.len(),
            },
        ));
    }

    if attempts.iter().all(|s| s.is_dns() || s.is_skipped()) {
        return Err(ValidationErrorKind::InvalidSolveCount(SolveCountError::AllDnsOrSkipped));
    }

    let skipped_tail_ok = attempts
        .iter()
        .skip_while(|s| s.is_unskipped())
        .all(SolveTime::is_skipped);
    if !skipped_tail_ok {
        return Err(ValidationErrorKind::InvalidSolveOrdering);
    }

    let unskipped = attempts.iter().filter(|s| s.is_unskipped()).count();
    if unskipped != format.expected_solve_count {
        return Err(ValidationErrorKind::InvalidSolveCount(SolveCountError::WrongCount {
            expected: format.expected_solve_count,
            found: unskipped,
        }));
    }

    Ok(())
}

/// Unskipped attempts ordered by ranking value, best first.
pub fn sorted_solves(attempts: &[SolveTime]) -> Vec<SolveTime> {
    let mut solves: Vec<SolveTime> = attempts.iter().copied().filter(SolveTime::is_unskipped).collect();
    solves.sort_by_key(SolveTime::wca_value);
    solves
}

/// Attempts that count towards the average: the sorted unskipped attempts
/// without the `trim_count` best and `trim_count` worst.
pub fn counting_solves(attempts: &[SolveTime], format: &FormatRule) -> Vec<SolveTime> {
    let sorted = sorted_solves(attempts);
    let trim = format.trim_count;
    if sorted.len() <= 2 * trim {
        return Vec::new();
    }
    sorted[trim..sorted.len() - trim].to_vec()
}

/// Whether rounds of this format/event pair carry an average.
///
/// Mean and average formats always do. Best of 3 only does for the events in
/// the legacy table.
pub fn average_eligible(format: &FormatRule, event: &EventRule, legacy: &LegacyAverageTable) -> bool {
    match format.kind {
        FormatKind::Average | FormatKind::Mean => true,
        FormatKind::BestOf => format.is_best_of(3) && legacy.contains(&event.id),
    }
}

/// Best single of a round, or 0 when nothing was completed.
pub fn compute_best(attempts: &[SolveTime]) -> i64 {
    sorted_solves(attempts)
        .first()
        .and_then(SolveTime::magnitude)
        .unwrap_or(0)
}

/// Average of a round as stored in results.
///
/// Returns 0 when the round has no average (bad solve count, missed cutoff,
/// ineligible format) and [`DNF_VALUE`] when a counting attempt is DNF/DNS.
/// Move-count averages carry two implied decimals.
pub fn compute_average(
    attempts: &[SolveTime],
    event: &EventRule,
    format: &FormatRule,
    legacy: &LegacyAverageTable,
    missed_cutoff: bool,
) -> i64 {
    if check_solve_count(attempts, Some(format)).is_err()
        || missed_cutoff
        || !average_eligible(format, event, legacy)
    {
        return 0;
    }

    let counting = counting_solves(attempts, format);
    if counting.is_empty() {
        tracing::debug!(format = %format.id, "format trims every solve, no average");
        return 0;
    }
    if counting.iter().any(SolveTime::is_incomplete) {
        return DNF_VALUE;
    }

    let count = counting.len() as i128;
    let sum: i128 = counting
        .iter()
        .filter_map(SolveTime::magnitude)
        .map(i128::from)
        .sum();

    let average = if event.uses_move_count {
        round_div(100 * sum, count)
    } else if sum > i128::from(SECOND_ROUNDING_THRESHOLD) * count {
        round_div(sum, 100 * count) * 100
    } else {
        round_div(sum, count)
    };

    let average = clamp_to_i64(average);
    tracing::trace!(event = %event.id, format = %format.id, average, "computed average");
    average
}

/// Integer division rounding half away from zero. `denominator` is positive.
fn round_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
