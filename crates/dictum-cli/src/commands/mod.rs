//! CLI command implementations.

mod check;
mod coverage;
mod eval;
mod number;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};
pub use number::{run_number, NumberArgs};
