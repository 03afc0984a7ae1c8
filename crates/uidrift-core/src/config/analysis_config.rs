//! Diff engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_MATCH_CONFIDENCE;

/// Configuration for component comparison and single-set analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum weighted similarity for a fuzzy match. Default: 0.7.
    pub min_match_confidence: Option<f64>,
    /// Naming pattern and event-handler prefix checks. Default: true.
    pub check_naming: Option<bool>,
    /// Cross-component prop type consistency. Default: true.
    pub check_prop_types: Option<bool>,
    /// Deprecated component detection. Default: true.
    pub check_deprecated: Option<bool>,
    /// Accessibility issues on interactive controls. Default: true.
    pub check_accessibility: Option<bool>,
    /// Hardcoded literal values. Default: true.
    pub check_hardcoded: Option<bool>,
    /// Near-duplicate component names. Default: true.
    pub check_duplicates: Option<bool>,
    /// Components without documentation. Default: false.
    pub check_documentation: Option<bool>,
}

impl AnalysisConfig {
    pub fn effective_min_match_confidence(&self) -> f64 {
        self.min_match_confidence
            .unwrap_or(DEFAULT_MIN_MATCH_CONFIDENCE)
    }

    pub fn effective_check_naming(&self) -> bool {
        self.check_naming.unwrap_or(true)
    }

    pub fn effective_check_prop_types(&self) -> bool {
        self.check_prop_types.unwrap_or(true)
    }

    pub fn effective_check_deprecated(&self) -> bool {
        self.check_deprecated.unwrap_or(true)
    }

    pub fn effective_check_accessibility(&self) -> bool {
        self.check_accessibility.unwrap_or(true)
    }

    pub fn effective_check_hardcoded(&self) -> bool {
        self.check_hardcoded.unwrap_or(true)
    }

    pub fn effective_check_duplicates(&self) -> bool {
        self.check_duplicates.unwrap_or(true)
    }

    pub fn effective_check_documentation(&self) -> bool {
        self.check_documentation.unwrap_or(false)
    }
}
