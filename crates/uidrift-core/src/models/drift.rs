//! Drift signals: the unit of detected misalignment.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::component::HardcodedValue;
use super::identifiers::create_drift_id;
use crate::errors::ModelError;

/// The closed drift taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriftType {
    DeprecatedPattern,
    AccessibilityConflict,
    SemanticMismatch,
    OrphanedComponent,
    OrphanedToken,
    ValueDivergence,
    NamingInconsistency,
    MissingDocumentation,
    HardcodedValue,
    FrameworkSprawl,
}

impl DriftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeprecatedPattern => "deprecated-pattern",
            Self::AccessibilityConflict => "accessibility-conflict",
            Self::SemanticMismatch => "semantic-mismatch",
            Self::OrphanedComponent => "orphaned-component",
            Self::OrphanedToken => "orphaned-token",
            Self::ValueDivergence => "value-divergence",
            Self::NamingInconsistency => "naming-inconsistency",
            Self::MissingDocumentation => "missing-documentation",
            Self::HardcodedValue => "hardcoded-value",
            Self::FrameworkSprawl => "framework-sprawl",
        }
    }

    pub fn all() -> &'static [DriftType] {
        &[
            Self::DeprecatedPattern,
            Self::AccessibilityConflict,
            Self::SemanticMismatch,
            Self::OrphanedComponent,
            Self::OrphanedToken,
            Self::ValueDivergence,
            Self::NamingInconsistency,
            Self::MissingDocumentation,
            Self::HardcodedValue,
            Self::FrameworkSprawl,
        ]
    }
}

impl fmt::Display for DriftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "drift type",
                value: s.to_string(),
            })
    }
}

/// Drift severity. Ordering puts `Critical` first so an ascending sort
/// lists the most severe signals at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// True when this severity is at least as severe as `other`.
    pub fn is_at_least(&self, other: Severity) -> bool {
        *self <= other
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(ModelError::UnknownVariant {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

/// Highest severity in a list; `Info` when the list is empty.
pub fn get_highest_severity<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().min().unwrap_or(Severity::Info)
}

/// Stable sort, critical first.
pub fn sort_drifts_by_severity(drifts: &mut [DriftSignal]) {
    drifts.sort_by_key(|d| d.severity);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Component,
    Token,
}

/// One side of a drift signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSource {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_name: String,
    pub location: String,
}

impl DriftSource {
    pub fn component(component: &super::Component) -> Self {
        Self {
            entity_type: EntityType::Component,
            entity_id: component.id.clone(),
            entity_name: component.name.clone(),
            location: component.source.location(),
        }
    }

    pub fn token(token: &super::DesignToken) -> Self {
        Self {
            entity_type: EntityType::Token,
            entity_id: token.id.clone(),
            entity_name: token.name.clone(),
            location: token.source.location(),
        }
    }
}

/// A token that could replace a hardcoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSuggestion {
    pub hardcoded_value: String,
    pub token_id: String,
    pub token_name: String,
    pub token_value: String,
    pub confidence: f64,
}

/// Blame information supplied by the (external) git collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriftDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_suggestions: Option<Vec<TokenSuggestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_context: Option<GitContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<HardcodedValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_confidence: Option<f64>,
}

impl DriftDetails {
    /// `actual` as a string, if and only if it is a JSON string.
    pub fn actual_str(&self) -> Option<&str> {
        self.actual.as_ref().and_then(Value::as_str)
    }
}

/// A detected misalignment between expected and actual design state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSignal {
    /// Deterministic id, see [`create_drift_id`].
    pub id: String,
    #[serde(rename = "type")]
    pub drift_type: DriftType,
    pub severity: Severity,
    pub source: DriftSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<DriftSource>,
    pub message: String,
    #[serde(default)]
    pub details: DriftDetails,
    pub detected_at: DateTime<Utc>,
}

impl DriftSignal {
    pub fn new(
        drift_type: DriftType,
        severity: Severity,
        source: DriftSource,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: create_drift_id(drift_type, &source.entity_id, None),
            drift_type,
            severity,
            source,
            target: None,
            message: message.into(),
            details: DriftDetails::default(),
            detected_at: Utc::now(),
        }
    }

    /// Attach the other side of a two-sided mismatch; the id then covers both entities.
    pub fn with_target(mut self, target: DriftSource) -> Self {
        self.id = create_drift_id(self.drift_type, &self.source.entity_id, Some(&target.entity_id));
        self.target = Some(target);
        self
    }

    /// Distinguish several signals of one type on the same entity.
    pub fn qualified(mut self, qualifier: &str) -> Self {
        self.id = create_drift_id(self.drift_type, &self.source.entity_id, Some(qualifier));
        self
    }

    pub fn with_details(mut self, details: DriftDetails) -> Self {
        self.details = details;
        self
    }

    pub fn with_detected_at(mut self, at: DateTime<Utc>) -> Self {
        self.detected_at = at;
        self
    }
}

/// Per-severity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftSummary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl DriftSummary {
    pub fn from_drifts(drifts: &[DriftSignal]) -> Self {
        let mut summary = Self {
            total: drifts.len(),
            ..Self::default()
        };
        for drift in drifts {
            match drift.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Info => summary.info += 1,
            }
        }
        summary
    }
}
