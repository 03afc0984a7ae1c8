//! CI result shape consumed by CI gates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uidrift_core::config::FailOn;
use uidrift_core::constants::{CI_TOP_ISSUES, VERSION};
use uidrift_core::models::{DriftSignal, DriftSummary};

use super::exit_code::calculate_exit_code;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiResult {
    pub version: String,
    /// RFC 3339 in JSON.
    pub timestamp: DateTime<Utc>,
    pub summary: DriftSummary,
    /// The first ten drifts, in input order.
    pub top_issues: Vec<DriftSignal>,
    pub exit_code: i32,
}

pub fn build_ci_result(drifts: &[DriftSignal], fail_on: FailOn) -> CiResult {
    build_ci_result_at(drifts, fail_on, Utc::now())
}

/// [`build_ci_result`] with a caller-supplied timestamp.
pub fn build_ci_result_at(drifts: &[DriftSignal], fail_on: FailOn, now: DateTime<Utc>) -> CiResult {
    let summary = DriftSummary::from_drifts(drifts);
    let exit_code = calculate_exit_code(&summary, fail_on);
    tracing::info!(
        total = summary.total,
        critical = summary.critical,
        warning = summary.warning,
        info = summary.info,
        fail_on = %fail_on,
        exit_code,
        "ci result built"
    );
    CiResult {
        version: VERSION.to_string(),
        timestamp: now,
        summary,
        top_issues: drifts.iter().take(CI_TOP_ISSUES).cloned().collect(),
        exit_code,
    }
}
