//! Declarative drift rules as loaded from `[drift]` in `uidrift.toml`.
//!
//! ```toml
//! [[drift.ignore]]
//! type = "hardcoded-value"
//! file = "src/layouts/**"
//! reason = "layout primitives use raw spacing"
//!
//! [[drift.promote]]
//! type = "naming-inconsistency"
//! to = "warning"
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{DriftType, Severity};

/// Predicate dimensions shared by every rule kind. Set dimensions are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub drift_type: Option<DriftType>,
    /// Glob matched against the drift location without its `:line` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Regex on the entity name of component drifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Regex on the entity name of token drifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Exact string or regex on `details.actual`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl RuleMatch {
    /// A rule without any dimension matches nothing.
    pub fn is_empty(&self) -> bool {
        self.drift_type.is_none()
            && self.file.is_none()
            && self.component.is_none()
            && self.token.is_none()
            && self.value.is_none()
            && self.severity.is_none()
    }
}

/// Removes matching drifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftRule {
    #[serde(flatten)]
    pub matcher: RuleMatch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Re-grades matching drifts to `to`; first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoteRule {
    #[serde(flatten)]
    pub matcher: RuleMatch,
    pub to: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Forces matching drifts to critical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforceRule {
    #[serde(flatten)]
    pub matcher: RuleMatch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Access to the predicate part of any rule kind.
pub trait HasRuleMatch {
    fn rule_match(&self) -> &RuleMatch;
}

impl HasRuleMatch for RuleMatch {
    fn rule_match(&self) -> &RuleMatch {
        self
    }
}

impl HasRuleMatch for DriftRule {
    fn rule_match(&self) -> &RuleMatch {
        &self.matcher
    }
}

impl HasRuleMatch for PromoteRule {
    fn rule_match(&self) -> &RuleMatch {
        &self.matcher
    }
}

impl HasRuleMatch for EnforceRule {
    fn rule_match(&self) -> &RuleMatch {
        &self.matcher
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftRulesConfig {
    pub ignore: Vec<DriftRule>,
    pub promote: Vec<PromoteRule>,
    pub enforce: Vec<EnforceRule>,
}

impl DriftRulesConfig {
    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.promote.is_empty() && self.enforce.is_empty()
    }
}
