//! Diff engine types.

use serde::{Deserialize, Serialize};

use uidrift_core::config::AnalysisConfig;
use uidrift_core::constants::DEFAULT_MIN_MATCH_CONFIDENCE;
use uidrift_core::models::{Component, DesignToken, DriftSignal, Severity};

/// Options for [`compare_components`](super::compare_components).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonOptions {
    /// Minimum weighted similarity for a fuzzy match to be accepted.
    pub min_match_confidence: f64,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            min_match_confidence: DEFAULT_MIN_MATCH_CONFIDENCE,
        }
    }
}

impl From<&AnalysisConfig> for ComparisonOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            min_match_confidence: config.effective_min_match_confidence(),
        }
    }
}

/// How a component pair was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Identical normalized names. Confidence is always 1.
    Exact,
    /// Fuzzy match with confidence above 0.9.
    Similar,
    /// Fuzzy match at or above the minimum confidence.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferenceKind {
    /// Prop declared on the source side only.
    MissingInTarget,
    /// Prop declared on the target side only.
    MissingInSource,
    /// Prop on both sides with different types.
    TypeMismatch,
}

/// One prop-level difference within a matched pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDifference {
    pub prop: String,
    pub kind: DifferenceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMatch {
    pub source: Component,
    pub target: Component,
    pub confidence: f64,
    pub match_type: MatchType,
    pub differences: Vec<ComponentDifference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub matches: Vec<ComponentMatch>,
    pub orphaned_source: Vec<Component>,
    pub orphaned_target: Vec<Component>,
    pub drifts: Vec<DriftSignal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMatch {
    pub source: DesignToken,
    pub target: DesignToken,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenComparisonResult {
    pub matches: Vec<TokenMatch>,
    pub orphaned_source: Vec<DesignToken>,
    pub orphaned_target: Vec<DesignToken>,
    pub drifts: Vec<DriftSignal>,
}

/// Switches for [`analyze_components`](super::analyze_components).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub check_naming: bool,
    pub check_prop_types: bool,
    pub check_deprecated: bool,
    pub check_accessibility: bool,
    pub check_hardcoded: bool,
    pub check_duplicates: bool,
    pub check_documentation: bool,
    /// Known tokens used to suggest replacements for hardcoded values.
    pub available_tokens: Vec<DesignToken>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from(&AnalysisConfig::default())
    }
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            check_naming: config.effective_check_naming(),
            check_prop_types: config.effective_check_prop_types(),
            check_deprecated: config.effective_check_deprecated(),
            check_accessibility: config.effective_check_accessibility(),
            check_hardcoded: config.effective_check_hardcoded(),
            check_duplicates: config.effective_check_duplicates(),
            check_documentation: config.effective_check_documentation(),
            available_tokens: Vec::new(),
        }
    }
}

/// A UI framework reported by a dependency scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFramework {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DetectedFramework {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }
}
