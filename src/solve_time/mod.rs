pub mod clock;
pub mod types;

pub use clock::{format_clock, format_result_value, format_solve_time, parse_solve_time, ParseError, ResultKind};
pub use types::{
    SolveTime, SolveTimeError, DNF_VALUE, DNS_VALUE, INCOMPLETE_RANK, MAX_ATTEMPTS, SKIPPED_VALUE,
};
