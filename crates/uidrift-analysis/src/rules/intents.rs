//! Intent suppression.

use chrono::{DateTime, Utc};

use uidrift_core::models::{intent_applies, DriftSignal, Intent};

/// Remove drifts covered by an active, unexpired intent recorded against
/// their id.
pub fn apply_intents(
    drifts: Vec<DriftSignal>,
    intents: &[Intent],
    now: DateTime<Utc>,
) -> Vec<DriftSignal> {
    if intents.is_empty() {
        return drifts;
    }
    let before = drifts.len();
    let kept: Vec<DriftSignal> = drifts
        .into_iter()
        .filter(|d| !intents.iter().any(|i| intent_applies(i, &d.id, now)))
        .collect();
    tracing::debug!(suppressed = before - kept.len(), "intents applied");
    kept
}
