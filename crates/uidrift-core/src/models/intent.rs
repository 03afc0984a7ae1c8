//! Recorded human decisions that suppress drift for a bounded time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Deprecation,
    Exception,
    Migration,
    Documentation,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStatus {
    Active,
    Archived,
    Expired,
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Expired => "expired",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub id: String,
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    pub status: IntentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_drift_id: Option<String>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Intent {
    /// An intent whose `expires_at` is at or before `now` is expired,
    /// whatever its recorded status.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn applies_to(&self, drift_id: &str, now: DateTime<Utc>) -> bool {
        intent_applies(self, drift_id, now)
    }
}

/// Active, unexpired, and recorded against exactly this drift id.
pub fn intent_applies(intent: &Intent, drift_id: &str, now: DateTime<Utc>) -> bool {
    intent.status == IntentStatus::Active
        && !intent.is_expired(now)
        && intent.related_drift_id.as_deref() == Some(drift_id)
}
