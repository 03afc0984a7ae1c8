//! Audit reports, close-match detection, and the pillar health score.

pub mod close_matches;
pub mod health_scorer;
pub mod report;
pub mod suggestions;
pub mod types;

pub use close_matches::{find_close_matches, parse_px, suggest_token, CloseMatchKind};
pub use health_scorer::{
    calculate_health_score_pillar, critical_issues_score, consistency_score, get_health_tier,
    token_health_score, value_discipline_score,
};
pub use report::generate_audit_report;
pub use suggestions::generate_suggestions;
pub use types::{
    AuditCategory, AuditReport, AuditValue, CategoryReport, CloseMatch, FileReport,
    HealthMetrics, HealthScorePillarResult, HealthTier, PillarScore, ValueCount, WorstFile,
};
