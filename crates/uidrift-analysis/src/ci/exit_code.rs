//! Exit code for a drift summary under a failure threshold.

use uidrift_core::config::FailOn;
use uidrift_core::models::DriftSummary;

/// 1 when the summary has a drift at or above `fail_on`, else 0.
///
/// Monotonic: a stricter threshold fails in a superset of cases.
pub fn calculate_exit_code(summary: &DriftSummary, fail_on: FailOn) -> i32 {
    let failed = match fail_on {
        FailOn::None => false,
        FailOn::Critical => summary.critical > 0,
        FailOn::Warning => summary.critical > 0 || summary.warning > 0,
        FailOn::Info => summary.critical > 0 || summary.warning > 0 || summary.info > 0,
    };
    i32::from(failed)
}
