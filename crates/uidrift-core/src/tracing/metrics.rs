//! Structured span field names shared by the analysis passes.

/// Diff engine: component comparison time in microseconds.
pub const COMPARE_COMPONENTS_TIME: &str = "compare_components_time";

/// Diff engine: token comparison time in microseconds.
pub const COMPARE_TOKENS_TIME: &str = "compare_tokens_time";

/// Diff engine: single-set analysis time in microseconds.
pub const ANALYZE_COMPONENTS_TIME: &str = "analyze_components_time";

/// Rule engine: time spent applying ignore/promote/enforce rules, in microseconds.
pub const RULE_APPLICATION_TIME: &str = "rule_application_time";

/// Audit: health score computation time in microseconds.
pub const HEALTH_SCORE_TIME: &str = "health_score_time";
