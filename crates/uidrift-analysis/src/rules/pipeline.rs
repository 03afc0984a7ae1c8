//! The configured rule pipeline: ignore, then promote, then enforce.

use std::time::Instant;

use uidrift_core::config::DriftRulesConfig;
use uidrift_core::models::DriftSignal;
use uidrift_core::tracing::metrics::RULE_APPLICATION_TIME;

use super::engine::{apply_enforce_rules, apply_ignore_rules, apply_promote_rules, WarningSink};

pub fn apply_drift_rules(
    drifts: Vec<DriftSignal>,
    config: &DriftRulesConfig,
    mut on_warning: WarningSink<'_, '_>,
) -> Vec<DriftSignal> {
    let start = Instant::now();
    let drifts = apply_ignore_rules(drifts, &config.ignore, on_warning.as_deref_mut());
    let drifts = apply_promote_rules(drifts, &config.promote, on_warning.as_deref_mut());
    let drifts = apply_enforce_rules(drifts, &config.enforce, on_warning.as_deref_mut());
    tracing::debug!(
        remaining = drifts.len(),
        { RULE_APPLICATION_TIME } = start.elapsed().as_micros() as u64,
        "drift rules applied"
    );
    drifts
}
