//! Hardcoded-value signals, one per component per value kind.

use serde_json::Value;

use uidrift_core::models::{
    Component, DesignToken, DriftDetails, DriftSignal, DriftSource, DriftType, HardcodedKind,
    HardcodedValue, Severity,
};

use crate::audit::close_matches::{suggest_token, CloseMatchKind};

/// Group a component's hardcoded values by kind, in first-appearance order.
pub fn group_by_kind(values: &[HardcodedValue]) -> Vec<(HardcodedKind, Vec<&HardcodedValue>)> {
    let mut groups: Vec<(HardcodedKind, Vec<&HardcodedValue>)> = Vec::new();
    for v in values {
        match groups.iter_mut().find(|(k, _)| *k == v.kind) {
            Some((_, members)) => members.push(v),
            None => groups.push((v.kind, vec![v])),
        }
    }
    groups
}

fn severity_for(kind: HardcodedKind) -> Severity {
    match kind {
        HardcodedKind::Color => Severity::Warning,
        _ => Severity::Info,
    }
}

fn close_match_kind(kind: HardcodedKind) -> Option<CloseMatchKind> {
    match kind {
        HardcodedKind::Color => Some(CloseMatchKind::Color),
        HardcodedKind::Spacing => Some(CloseMatchKind::Spacing),
        _ => None,
    }
}

pub fn hardcoded_drifts(component: &Component, tokens: &[DesignToken]) -> Vec<DriftSignal> {
    group_by_kind(&component.metadata.hardcoded_values)
        .into_iter()
        .map(|(kind, members)| {
            let literals: Vec<&str> = members.iter().map(|v| v.value.as_str()).collect();
            let message = format!(
                "{} has {} hardcoded {}: {}",
                component.name,
                members.len(),
                if members.len() == 1 {
                    kind.as_str().to_string()
                } else {
                    kind.plural_label().to_string()
                },
                literals.join(", ")
            );

            let token_suggestions = close_match_kind(kind)
                .filter(|_| !tokens.is_empty())
                .map(|ck| {
                    literals
                        .iter()
                        .filter_map(|lit| suggest_token(lit, tokens, ck))
                        .collect::<Vec<_>>()
                })
                .filter(|s| !s.is_empty());

            let affected: Vec<String> = members.iter().map(|v| v.location.clone()).collect();

            DriftSignal::new(
                DriftType::HardcodedValue,
                severity_for(kind),
                DriftSource::component(component),
                message,
            )
            .qualified(kind.as_str())
            .with_details(DriftDetails {
                actual: Some(Value::String(literals.join(", "))),
                affected_files: Some(affected),
                suggestions: Some(vec![format!(
                    "Replace hardcoded {} with design tokens",
                    kind.plural_label()
                )]),
                token_suggestions,
                occurrences: Some(members.iter().map(|v| (*v).clone()).collect()),
                ..Default::default()
            })
        })
        .collect()
}
