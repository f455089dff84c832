use super::engine::{check_solve_count, compute_average, compute_best};
use super::errors::{Field, ValidationError, ValidationErrorKind};
use super::record::ResultRecord;
use crate::rules::{EventRule, FormatRule, LegacyAverageTable, RuleLookup};

/// Validate a result row against its event and format.
///
/// Returns every failed check (not just the first); an empty list means the
/// row is valid. Missing rules turn into errors on the `event`/`format`
/// fields and skip the checks that need them.
pub fn validate(
    record: &ResultRecord,
    event: Option<&EventRule>,
    format: Option<&FormatRule>,
    legacy: &LegacyAverageTable,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if event.is_none() {
        errors.push(ValidationError::new(Field::Event, ValidationErrorKind::MissingAssociation));
    }
    if format.is_none() {
        errors.push(ValidationError::new(Field::Format, ValidationErrorKind::MissingAssociation));
    }

    // Attempt checks and best/average depend on the event's units
    let Some(event) = event else {
        return errors;
    };

    for (i, solve_time) in record.attempts.iter().enumerate() {
        if let Err(e) = solve_time.check(event) {
            errors.push(ValidationError::new(
                Field::Value(i + 1),
                ValidationErrorKind::InvalidIndividualSolve(e),
            ));
        }
    }

    let solve_count = check_solve_count(&record.attempts, format);
    if let Err(kind) = &solve_count {
        errors.push(ValidationError::new(Field::Base, kind.clone()));
    }

    // The average is only checked once the solve count is right
    if let (Ok(()), Some(format)) = (&solve_count, format) {
        let correct = compute_average(
            &record.attempts,
            event,
            format,
            legacy,
            record.missed_combined_round_cutoff,
        );
        if correct != record.average {
            errors.push(ValidationError::new(
                Field::Average,
                ValidationErrorKind::AverageMismatch {
                    correct,
                    stored: record.average,
                },
            ));
        }
    }

    let correct_best = compute_best(&record.attempts);
    if correct_best != record.best {
        errors.push(ValidationError::new(
            Field::Best,
            ValidationErrorKind::BestMismatch {
                correct: correct_best,
                stored: record.best,
            },
        ));
    }

    tracing::debug!(
        event = %record.event_id,
        format = %record.format_id,
        errors = errors.len(),
        "validated result"
    );
    errors
}

/// Resolve the record's event and format through `rules`, then validate.
pub fn validate_with<R>(record: &ResultRecord, rules: &R) -> Vec<ValidationError>
where
    R: RuleLookup + ?Sized,
{
    validate(
        record,
        rules.lookup_event(&record.event_id),
        rules.lookup_format(&record.format_id),
        rules.legacy_average_events(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleBook;
    use crate::scoring::SolveCountError;
    use crate::solve_time::SolveTime::{Completed as C, Dnf, Dns, Skipped};
    use crate::solve_time::{SolveTimeError, DNF_VALUE};

    fn check(record: &ResultRecord) -> Vec<ValidationError> {
        validate_with(record, &RuleBook::builtin())
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_average_of_5() {
        let record = ResultRecord::new("333", "a", vec![C(1200), C(1300), C(1250), Dnf, C(1400)])
            .with_stored(1200, 1317);
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_valid_fewest_moves_mean() {
        let record = ResultRecord::new("333fm", "m", vec![C(25), C(27), C(26)]).with_stored(25, 2600);
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_valid_dnf_average() {
        let record = ResultRecord::new("333", "a", vec![C(1200), Dnf, C(1250), Dnf, C(1400)])
            .with_stored(1200, DNF_VALUE);
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_average_mismatch() {
        let record = ResultRecord::new("333fm", "m", vec![C(25), C(27), C(26)]).with_stored(25, 26);
        let errors = check(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Average);
        assert_eq!(errors[0].full_message(), "Average should be 2600");
    }

    #[test]
    fn test_best_mismatch() {
        let record = ResultRecord::new("333", "3", vec![Dnf, C(900), C(850)]).with_stored(900, 0);
        let errors = check(&record);
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::BestMismatch { correct: 850, stored: 900 }]
        );
    }

    #[test]
    fn test_non_legacy_best_of_3_expects_zero_average() {
        let record = ResultRecord::new("333", "3", vec![C(1000), C(1100), C(1200)]).with_stored(1000, 1100);
        let errors = check(&record);
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::AverageMismatch { correct: 0, stored: 1100 }]
        );
    }

    #[test]
    fn test_legacy_best_of_3_expects_average() {
        let record = ResultRecord::new("333bf", "3", vec![C(3000), C(3300), C(3600)]).with_stored(3000, 0);
        let errors = check(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "should be 3300");
    }

    #[test]
    fn test_non_trailing_skip() {
        let record = ResultRecord::new("333", "2", vec![C(1000), Skipped, C(1200)]).with_stored(1000, 0);
        let errors = check(&record);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidSolveOrdering]);
        assert_eq!(errors[0].field, Field::Base);
        assert_eq!(errors[0].full_message(), "Skipped solves must all come at the end");
    }

    #[test]
    fn test_trailing_skips_accepted() {
        let record = ResultRecord::new("333", "2", vec![C(1000), C(1200), Skipped, Skipped, Skipped])
            .with_stored(1000, 0);
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_all_dns() {
        let record = ResultRecord::new("333", "m", vec![Dns, Dns, Dns]);
        let errors = check(&record);
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::InvalidSolveCount(SolveCountError::AllDnsOrSkipped)]
        );
    }

    #[test]
    fn test_wrong_solve_count_skips_average_check() {
        // The stored average is nonsense, but only the count is reported
        let record = ResultRecord::new("333", "a", vec![C(1000), C(1100), C(1200)]).with_stored(1000, 4242);
        let errors = check(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].full_message(), "Expected 5 solves, but found 3");
    }

    #[test]
    fn test_unknown_format() {
        let record = ResultRecord::new("333", "q", vec![C(1000)]).with_stored(1000, 0);
        let errors = check(&record);
        assert_eq!(
            errors,
            vec![
                ValidationError::new(Field::Format, ValidationErrorKind::MissingAssociation),
                ValidationError::new(
                    Field::Base,
                    ValidationErrorKind::InvalidSolveCount(SolveCountError::InvalidFormat)
                ),
            ]
        );
    }

    #[test]
    fn test_unknown_event_only_reports_missing_event() {
        let record = ResultRecord::new("magic", "a", vec![C(-5)]).with_stored(77, 88);
        let errors = check(&record);
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Event, ValidationErrorKind::MissingAssociation)]
        );
        assert_eq!(errors[0].full_message(), "Event must exist");
    }

    #[test]
    fn test_invalid_individual_solve() {
        let record = ResultRecord::new("333fm", "m", vec![C(25), C(81), C(-3)]).with_stored(-3, 0);
        let errors = check(&record);
        assert_eq!(errors[0].field, Field::Value(2));
        assert_eq!(
            errors[0].kind,
            ValidationErrorKind::InvalidIndividualSolve(SolveTimeError::TooManyMoves { moves: 81, max: 80 })
        );
        assert_eq!(errors[1].field, Field::Value(3));
        assert_eq!(errors[1].full_message(), "Value3 must be positive (got -3)");
    }

    #[test]
    fn test_checks_are_additive() {
        // Wrong count and wrong best are both reported
        let record = ResultRecord::new("333", "a", vec![C(1000), C(1100)]).with_stored(1100, 0);
        let errors = check(&record);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::Base);
        assert_eq!(errors[1].field, Field::Best);
    }

    #[test]
    fn test_missed_cutoff_expects_zero_average() {
        let mut record = ResultRecord::new("333", "a", vec![C(1000), C(1100), C(1200), C(1300), C(1400)])
            .with_stored(1000, 0);
        record.missed_combined_round_cutoff = true;
        assert!(check(&record).is_empty());

        record.missed_combined_round_cutoff = false;
        let errors = check(&record);
        assert_eq!(errors[0].message(), "should be 1200");
    }

    #[test]
    fn test_validate_with_explicit_rules() {
        let event = EventRule::timed("333", "3x3x3 Cube");
        let format = FormatRule::new("3", crate::rules::FormatKind::BestOf, 3, 0);
        let legacy = LegacyAverageTable::new(["333"]);
        let record = ResultRecord::new("333", "3", vec![C(1000), C(1100), C(1200)]).with_stored(1000, 1100);
        assert!(validate(&record, Some(&event), Some(&format), &legacy).is_empty());
    }
}
