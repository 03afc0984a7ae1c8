//! Semantic diff engine.
//!
//! Two-snapshot comparison (`compare_components`, `compare_tokens`),
//! single-set consistency analysis (`analyze_components`), and framework
//! sprawl detection.

pub mod components;
pub mod consistency;
pub mod hardcoded;
pub mod naming;
pub mod similarity;
pub mod sprawl;
pub mod tokens;
pub mod types;

pub use components::compare_components;
pub use consistency::analyze_components;
pub use similarity::{component_similarity, jaccard_similarity, levenshtein_distance, string_similarity};
pub use sprawl::{check_framework_sprawl, KNOWN_UI_FRAMEWORKS};
pub use tokens::compare_tokens;
pub use types::{
    AnalysisOptions, ComparisonOptions, ComparisonResult, ComponentDifference, ComponentMatch,
    DetectedFramework, DifferenceKind, MatchType, TokenComparisonResult, TokenMatch,
};
