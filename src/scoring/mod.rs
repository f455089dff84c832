pub mod engine;
pub mod errors;
pub mod record;
pub mod validation;

pub use engine::{
    average_eligible, check_solve_count, compute_average, compute_best, counting_solves, sorted_solves,
    SECOND_ROUNDING_THRESHOLD,
};
pub use errors::{Field, SolveCountError, ValidationError, ValidationErrorKind};
pub use record::ResultRecord;
pub use validation::{validate, validate_with};
