//! Audit and health-score types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an extracted literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditCategory {
    Color,
    Spacing,
    Typography,
    Radius,
    Shadow,
    Other,
}

impl AuditCategory {
    /// Unique values a healthy scale would need in this category.
    pub fn ideal_unique(&self) -> usize {
        match self {
            Self::Color => 12,
            Self::Spacing => 8,
            Self::Typography => 6,
            Self::Radius => 4,
            Self::Shadow => 4,
            Self::Other => 10,
        }
    }
}

/// One literal occurrence found by a value extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditValue {
    pub category: AuditCategory,
    pub value: String,
    pub file: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub category: AuditCategory,
    pub unique_count: usize,
    pub total_count: usize,
    /// Most used values, highest count first.
    pub most_common: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub total_values: usize,
    pub unique_values: usize,
    pub categories: Vec<CategoryReport>,
    pub worst_files: Vec<FileReport>,
    /// 0-100, 100 when nothing was found.
    pub score: u32,
}

/// A found value that nearly, but not exactly, equals a known token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseMatch {
    pub value: String,
    pub token_id: String,
    pub token_name: String,
    pub token_value: String,
    /// Edit distance for colours, pixel delta for spacing.
    pub distance: f64,
}

/// The file with the most drift, for targeted suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorstFile {
    pub path: String,
    pub issue_count: usize,
}

/// Aggregate counts fed to [`calculate_health_score_pillar`](super::calculate_health_score_pillar).
///
/// All fields default to zero/absent. A default value scores 80: with no
/// tokens and no framework the token-health pillar is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthMetrics {
    pub component_count: usize,
    pub token_count: usize,
    pub unused_token_count: usize,
    pub hardcoded_value_count: usize,
    pub unused_component_count: usize,
    pub orphaned_component_count: usize,
    pub repeated_pattern_count: usize,
    pub total_drift_count: usize,
    pub critical_count: usize,
    pub naming_inconsistency_count: usize,
    pub semantic_mismatch_count: usize,
    pub deprecated_pattern_count: usize,
    /// Utility-class framework in use, e.g. "tailwind".
    pub utility_framework: Option<String>,
    /// Component library in use, e.g. "mui", "chakra".
    pub design_system_library: Option<String>,
    pub shadcn_detected: bool,
    pub unique_spacing_values: usize,
    pub worst_file: Option<WorstFile>,
    /// Hardcoded-value drift located in vendored or third-party files.
    pub vendored_drift_count: usize,
}

/// One pillar's score and its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScore {
    pub score: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    Great,
    Good,
    #[serde(rename = "OK")]
    Ok,
    Bad,
    Terrible,
}

impl HealthTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Ok => "OK",
            Self::Bad => "Bad",
            Self::Terrible => "Terrible",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScorePillarResult {
    /// Sum of the four pillars, 0-100.
    pub score: u32,
    pub value_discipline: PillarScore,
    pub token_health: PillarScore,
    pub consistency: PillarScore,
    pub critical_issues: PillarScore,
    pub tier: HealthTier,
    pub suggestions: Vec<String>,
}
