//! Two-snapshot component comparison: exact phase, fuzzy phase, prop diff.

use std::time::Instant;

use serde_json::Value;

use uidrift_core::models::{
    get_highest_severity, normalize_component_name, Component, DriftDetails, DriftSignal,
    DriftSource, DriftType, Severity,
};
use uidrift_core::tracing::metrics::COMPARE_COMPONENTS_TIME;
use uidrift_core::types::collections::FxHashMap;

use super::similarity::{component_similarity, SIMILAR_THRESHOLD};
use super::types::{
    ComparisonOptions, ComparisonResult, ComponentDifference, ComponentMatch, DifferenceKind,
    MatchType,
};

/// Match `source` components (e.g. code) against `target` components
/// (e.g. design) and classify matches, orphans, and drift.
///
/// Exact normalized-name pairs are taken first; remaining components are
/// paired by weighted similarity. No component is matched twice.
pub fn compare_components(
    source: &[Component],
    target: &[Component],
    options: &ComparisonOptions,
) -> ComparisonResult {
    let start = Instant::now();
    let mut source_matched = vec![false; source.len()];
    let mut target_matched = vec![false; target.len()];
    let mut pairs: Vec<(usize, usize, f64, MatchType)> = Vec::new();

    // Phase 1: exact. Targets are consumed in list order per normalized name.
    let mut targets_by_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    for (j, t) in target.iter().enumerate().rev() {
        targets_by_name
            .entry(normalize_component_name(&t.name))
            .or_default()
            .push(j);
    }
    for (i, s) in source.iter().enumerate() {
        if let Some(j) = targets_by_name
            .get_mut(&normalize_component_name(&s.name))
            .and_then(Vec::pop)
        {
            source_matched[i] = true;
            target_matched[j] = true;
            pairs.push((i, j, 1.0, MatchType::Exact));
        }
    }

    // Phase 2: fuzzy, best candidate wins, first candidate on ties.
    for (i, s) in source.iter().enumerate() {
        if source_matched[i] {
            continue;
        }
        let mut best: Option<(usize, f64)> = None;
        for (j, t) in target.iter().enumerate() {
            if target_matched[j] {
                continue;
            }
            let score = component_similarity(s, t);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((j, score));
            }
        }
        if let Some((j, score)) = best {
            if score >= options.min_match_confidence {
                source_matched[i] = true;
                target_matched[j] = true;
                let match_type = if score > SIMILAR_THRESHOLD {
                    MatchType::Similar
                } else {
                    MatchType::Partial
                };
                pairs.push((i, j, score, match_type));
            }
        }
    }

    let mut result = ComparisonResult::default();

    for (i, j, confidence, match_type) in pairs {
        let (s, t) = (&source[i], &target[j]);
        let differences = compare_props(s, t);
        if let Some(drift) = mismatch_drift(s, t, &differences, confidence) {
            result.drifts.push(drift);
        }
        result.matches.push(ComponentMatch {
            source: s.clone(),
            target: t.clone(),
            confidence,
            match_type,
            differences,
        });
    }

    for (s, _) in source.iter().zip(&source_matched).filter(|(_, m)| !**m) {
        result.drifts.push(
            DriftSignal::new(
                DriftType::OrphanedComponent,
                Severity::Warning,
                DriftSource::component(s),
                format!(
                    "Component '{}' exists in {} but has no counterpart in the compared set",
                    s.name,
                    s.source.side_label()
                ),
            )
            .with_details(DriftDetails {
                suggestions: Some(vec![format!(
                    "Add '{}' to the design system or remove it if it is unused",
                    s.name
                )]),
                ..Default::default()
            }),
        );
        result.orphaned_source.push(s.clone());
    }

    for (t, _) in target.iter().zip(&target_matched).filter(|(_, m)| !**m) {
        result.drifts.push(DriftSignal::new(
            DriftType::OrphanedComponent,
            Severity::Info,
            DriftSource::component(t),
            format!(
                "Component '{}' exists in {} but is not implemented in the compared set",
                t.name,
                t.source.side_label()
            ),
        ));
        result.orphaned_target.push(t.clone());
    }

    tracing::debug!(
        matched = result.matches.len(),
        orphaned_source = result.orphaned_source.len(),
        orphaned_target = result.orphaned_target.len(),
        drifts = result.drifts.len(),
        { COMPARE_COMPONENTS_TIME } = start.elapsed().as_micros() as u64,
        "component comparison complete"
    );

    result
}

/// Prop-level differences of a matched pair. Prop names compare
/// case-insensitively, types on their trimmed text.
pub fn compare_props(source: &Component, target: &Component) -> Vec<ComponentDifference> {
    let mut differences = Vec::new();

    for prop in &source.props {
        match target.prop(&prop.name) {
            None => differences.push(ComponentDifference {
                prop: prop.name.clone(),
                kind: DifferenceKind::MissingInTarget,
                source_type: Some(prop.prop_type.clone()),
                target_type: None,
                severity: if prop.required {
                    Severity::Warning
                } else {
                    Severity::Info
                },
                description: format!(
                    "{}prop '{}' is missing from {}",
                    if prop.required { "required " } else { "" },
                    prop.name,
                    target.name
                ),
            }),
            Some(other) if other.prop_type.trim() != prop.prop_type.trim() => {
                differences.push(ComponentDifference {
                    prop: prop.name.clone(),
                    kind: DifferenceKind::TypeMismatch,
                    source_type: Some(prop.prop_type.clone()),
                    target_type: Some(other.prop_type.clone()),
                    severity: Severity::Warning,
                    description: format!(
                        "prop '{}' is '{}' here but '{}' in {}",
                        prop.name, prop.prop_type, other.prop_type, target.name
                    ),
                });
            }
            Some(_) => {}
        }
    }

    for prop in &target.props {
        if source.prop(&prop.name).is_none() {
            differences.push(ComponentDifference {
                prop: prop.name.clone(),
                kind: DifferenceKind::MissingInSource,
                source_type: None,
                target_type: Some(prop.prop_type.clone()),
                severity: Severity::Info,
                description: format!("prop '{}' exists only in {}", prop.name, target.name),
            });
        }
    }

    differences
}

fn mismatch_drift(
    source: &Component,
    target: &Component,
    differences: &[ComponentDifference],
    confidence: f64,
) -> Option<DriftSignal> {
    if !differences
        .iter()
        .any(|d| d.severity.is_at_least(Severity::Warning))
    {
        return None;
    }
    let severity = get_highest_severity(differences.iter().map(|d| d.severity));
    let diff = differences
        .iter()
        .map(|d| format!("[{}] {}", d.severity, d.description))
        .collect::<Vec<_>>()
        .join("\n");
    let expected: Vec<Value> = target
        .props
        .iter()
        .map(|p| Value::String(format!("{}: {}", p.name, p.prop_type)))
        .collect();
    let actual: Vec<Value> = source
        .props
        .iter()
        .map(|p| Value::String(format!("{}: {}", p.name, p.prop_type)))
        .collect();

    Some(
        DriftSignal::new(
            DriftType::SemanticMismatch,
            severity,
            DriftSource::component(source),
            format!(
                "{} has {} prop difference(s) from {}",
                source.name,
                differences.len(),
                target.name
            ),
        )
        .with_target(DriftSource::component(target))
        .with_details(DriftDetails {
            expected: Some(Value::Array(expected)),
            actual: Some(Value::Array(actual)),
            diff: Some(diff),
            match_confidence: Some(confidence),
            ..Default::default()
        }),
    )
}
