//! Two-snapshot token comparison. Exact normalized-name matching only.

use std::time::Instant;

use serde_json::Value;

use uidrift_core::models::{
    normalize_token_name, DesignToken, DriftDetails, DriftSignal, DriftSource, DriftType,
    Severity,
};
use uidrift_core::tracing::metrics::COMPARE_TOKENS_TIME;
use uidrift_core::types::collections::FxHashMap;

use super::types::{TokenComparisonResult, TokenMatch};

/// Compare code-side tokens (`source`) against design-side tokens (`target`).
pub fn compare_tokens(source: &[DesignToken], target: &[DesignToken]) -> TokenComparisonResult {
    let start = Instant::now();
    let mut targets_by_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    for (j, t) in target.iter().enumerate().rev() {
        targets_by_name
            .entry(normalize_token_name(&t.name))
            .or_default()
            .push(j);
    }

    let mut target_matched = vec![false; target.len()];
    let mut result = TokenComparisonResult::default();

    for s in source {
        let Some(j) = targets_by_name
            .get_mut(&normalize_token_name(&s.name))
            .and_then(Vec::pop)
        else {
            result.drifts.push(DriftSignal::new(
                DriftType::OrphanedToken,
                Severity::Info,
                DriftSource::token(s),
                format!("Token '{}' exists in code, not design", s.name),
            ));
            result.orphaned_source.push(s.clone());
            continue;
        };

        target_matched[j] = true;
        let t = &target[j];
        if !s.value.matches(&t.value) {
            let expected = t.value.display();
            let actual = s.value.display();
            result.drifts.push(
                DriftSignal::new(
                    DriftType::ValueDivergence,
                    Severity::Warning,
                    DriftSource::token(s),
                    format!(
                        "Token '{}' is {} in code but {} in design",
                        s.name, actual, expected
                    ),
                )
                .with_target(DriftSource::token(t))
                .with_details(DriftDetails {
                    diff: Some(format!("- {expected}\n+ {actual}")),
                    expected: Some(Value::String(expected)),
                    actual: Some(Value::String(actual)),
                    ..Default::default()
                }),
            );
        }
        result.matches.push(TokenMatch {
            source: s.clone(),
            target: t.clone(),
        });
    }

    for (t, _) in target.iter().zip(&target_matched).filter(|(_, m)| !**m) {
        result.drifts.push(DriftSignal::new(
            DriftType::OrphanedToken,
            Severity::Info,
            DriftSource::token(t),
            format!("Token '{}' exists in design, not implemented", t.name),
        ));
        result.orphaned_target.push(t.clone());
    }

    tracing::debug!(
        matched = result.matches.len(),
        orphaned_source = result.orphaned_source.len(),
        orphaned_target = result.orphaned_target.len(),
        { COMPARE_TOKENS_TIME } = start.elapsed().as_micros() as u64,
        "token comparison complete"
    );

    result
}
