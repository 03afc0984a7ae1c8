//! # uidrift-analysis
//!
//! The design-drift engine: semantic diff between component and token
//! snapshots, single-set consistency analysis, audit reports and health
//! scoring, declarative drift rules, and the CI decision.
//!
//! Every entry point is a pure function over already-materialized
//! `uidrift_core` values. Nothing here performs I/O.

pub mod audit;
pub mod ci;
pub mod diff;
pub mod rules;

pub use audit::{
    calculate_health_score_pillar, find_close_matches, generate_audit_report, get_health_tier,
    HealthMetrics, HealthScorePillarResult, HealthTier,
};
pub use ci::{build_ci_result, build_ci_result_at, calculate_exit_code, CiResult};
pub use diff::{
    analyze_components, check_framework_sprawl, compare_components, compare_tokens,
    AnalysisOptions, ComparisonOptions, ComparisonResult, TokenComparisonResult,
};
pub use rules::{
    apply_drift_rules, apply_enforce_rules, apply_ignore_rules, apply_intents,
    apply_promote_rules, rule_matches,
};
