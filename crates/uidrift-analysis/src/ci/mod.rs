//! CI decision: exit code and the fixed-shape CI result.

pub mod exit_code;
pub mod result;

pub use exit_code::calculate_exit_code;
pub use result::{build_ci_result, build_ci_result_at, CiResult};
