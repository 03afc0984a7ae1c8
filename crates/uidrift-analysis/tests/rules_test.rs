//! Tests for rule matching and the ignore/promote/enforce pipeline.

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use uidrift_analysis::rules::{
    apply_drift_rules, apply_enforce_rules, apply_ignore_rules, apply_intents,
    apply_promote_rules, rule_matches,
};
use uidrift_core::config::{DriftRule, DriftRulesConfig, EnforceRule, PromoteRule, RuleMatch};
use uidrift_core::errors::{RuleError, RuleField};
use uidrift_core::models::{
    DriftDetails, DriftSignal, DriftSource, DriftType, EntityType, Intent, IntentStatus,
    IntentType, Severity,
};

fn drift(
    drift_type: DriftType,
    severity: Severity,
    entity_type: EntityType,
    name: &str,
    location: &str,
) -> DriftSignal {
    DriftSignal::new(
        drift_type,
        severity,
        DriftSource {
            entity_type,
            entity_id: format!("react:{location}:{name}"),
            entity_name: name.to_string(),
            location: location.to_string(),
        },
        format!("{name} drifted"),
    )
}

fn component_drift(drift_type: DriftType, severity: Severity, name: &str, location: &str) -> DriftSignal {
    drift(drift_type, severity, EntityType::Component, name, location)
}

fn with_actual(d: DriftSignal, actual: serde_json::Value) -> DriftSignal {
    d.with_details(DriftDetails {
        actual: Some(actual),
        ..Default::default()
    })
}

fn layout_fixture() -> Vec<DriftSignal> {
    vec![
        component_drift(
            DriftType::HardcodedValue,
            Severity::Warning,
            "Grid",
            "src/layouts/Grid.tsx:10",
        ),
        component_drift(
            DriftType::HardcodedValue,
            Severity::Warning,
            "Button",
            "src/components/Button.tsx:4",
        ),
        component_drift(
            DriftType::NamingInconsistency,
            Severity::Info,
            "Flex",
            "src/layouts/Flex.tsx",
        ),
    ]
}

fn ignore(matcher: RuleMatch) -> DriftRule {
    DriftRule {
        matcher,
        reason: None,
    }
}

#[test]
fn test_ignore_by_type_and_file_glob() {
    let drifts = layout_fixture();
    let expected = vec![drifts[1].clone(), drifts[2].clone()];
    let rules = vec![ignore(RuleMatch {
        drift_type: Some(DriftType::HardcodedValue),
        file: Some("src/layouts/**".into()),
        ..Default::default()
    })];

    let kept = apply_ignore_rules(drifts, &rules, None);
    assert_eq!(kept, expected);
}

#[test]
fn test_file_glob_ignores_line_suffix() {
    let d = component_drift(
        DriftType::HardcodedValue,
        Severity::Warning,
        "Grid",
        "src/layouts/Grid.tsx:10:2",
    );
    let rule = RuleMatch {
        file: Some("src/layouts/*.tsx".into()),
        ..Default::default()
    };
    assert!(rule_matches(&d, &rule, None));
}

#[test]
fn test_invalid_regex_fails_open_and_reports() {
    let drifts = layout_fixture();
    let rules = vec![ignore(RuleMatch {
        component: Some("Grid(".into()),
        ..Default::default()
    })];

    let mut errors: Vec<RuleError> = Vec::new();
    let mut sink = |e: &RuleError| errors.push(e.clone());
    let kept = apply_ignore_rules(drifts.clone(), &rules, Some(&mut sink));

    assert_eq!(kept, drifts);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), RuleField::Component);
    assert_eq!(errors[0].rule_index(), 0);
    assert!(matches!(errors[0], RuleError::InvalidRegex { .. }));
}

#[test]
fn test_single_star_stays_within_one_directory() {
    let drifts = vec![
        component_drift(
            DriftType::HardcodedValue,
            Severity::Warning,
            "App",
            "src/App.tsx:3",
        ),
        component_drift(
            DriftType::HardcodedValue,
            Severity::Warning,
            "Button",
            "src/components/deep/Button.tsx:4",
        ),
    ];
    let expected = vec![drifts[1].clone()];
    let rules = vec![ignore(RuleMatch {
        file: Some("src/*.tsx".into()),
        ..Default::default()
    })];

    assert_eq!(apply_ignore_rules(drifts.clone(), &rules, None), expected);

    let recursive = RuleMatch {
        file: Some("src/**/*.tsx".into()),
        ..Default::default()
    };
    assert!(rule_matches(&drifts[1], &recursive, None));
}

#[test]
fn test_single_rule_predicate_reports_compile_errors() {
    let d = component_drift(
        DriftType::HardcodedValue,
        Severity::Warning,
        "Grid",
        "src/layouts/Grid.tsx",
    );
    let rule = RuleMatch {
        file: Some("src/[".into()),
        value: Some("(".into()),
        ..Default::default()
    };

    let mut fields: Vec<RuleField> = Vec::new();
    let mut sink = |e: &RuleError| fields.push(e.field());
    assert!(!rule_matches(&d, &rule, Some(&mut sink)));
    assert_eq!(fields, vec![RuleField::File, RuleField::Value]);
}

#[test]
fn test_invalid_pattern_disables_whole_rule() {
    let d = component_drift(
        DriftType::HardcodedValue,
        Severity::Warning,
        "Grid",
        "src/layouts/Grid.tsx",
    );
    let rule = RuleMatch {
        drift_type: Some(DriftType::HardcodedValue),
        token: Some("[".into()),
        ..Default::default()
    };
    assert!(!rule_matches(&d, &rule, None));
}

#[test]
fn test_component_rule_never_matches_token_entity() {
    let token = drift(
        DriftType::OrphanedToken,
        Severity::Info,
        EntityType::Token,
        "Button",
        "tokens.json",
    );
    let component_rule = RuleMatch {
        component: Some("Button".into()),
        ..Default::default()
    };
    let token_rule = RuleMatch {
        token: Some("^Butt".into()),
        ..Default::default()
    };
    assert!(!rule_matches(&token, &component_rule, None));
    assert!(rule_matches(&token, &token_rule, None));
}

#[test]
fn test_value_rule_requires_string_actual() {
    let base = component_drift(
        DriftType::HardcodedValue,
        Severity::Warning,
        "Card",
        "src/Card.tsx",
    );
    let rule = RuleMatch {
        value: Some("#fff".into()),
        ..Default::default()
    };
    let regex_rule = RuleMatch {
        value: Some("^#f+$".into()),
        ..Default::default()
    };

    assert!(!rule_matches(&base, &rule, None));
    assert!(!rule_matches(&with_actual(base.clone(), json!(["#fff"])), &rule, None));
    assert!(rule_matches(&with_actual(base.clone(), json!("#fff")), &rule, None));
    assert!(rule_matches(&with_actual(base.clone(), json!("#ffffff")), &regex_rule, None));
    assert!(!rule_matches(&with_actual(base, json!("#000")), &regex_rule, None));
}

#[test]
fn test_empty_rule_matches_nothing() {
    let drifts = layout_fixture();
    let rules = vec![DriftRule {
        matcher: RuleMatch::default(),
        reason: Some("placeholder".into()),
    }];
    assert!(!rule_matches(&drifts[0], &rules[0].matcher, None));
    assert_eq!(apply_ignore_rules(drifts.clone(), &rules, None), drifts);
}

#[test]
fn test_severity_dimension() {
    let drifts = layout_fixture();
    let rule = RuleMatch {
        severity: Some(Severity::Info),
        ..Default::default()
    };
    assert!(!rule_matches(&drifts[0], &rule, None));
    assert!(rule_matches(&drifts[2], &rule, None));
}

#[test]
fn test_promote_uses_first_matching_rule() {
    let drifts = layout_fixture();
    let rules = vec![
        PromoteRule {
            matcher: RuleMatch {
                component: Some("^Flex$".into()),
                ..Default::default()
            },
            to: Severity::Critical,
            reason: None,
        },
        PromoteRule {
            matcher: RuleMatch {
                drift_type: Some(DriftType::NamingInconsistency),
                ..Default::default()
            },
            to: Severity::Warning,
            reason: None,
        },
        PromoteRule {
            matcher: RuleMatch {
                component: Some("^Button$".into()),
                ..Default::default()
            },
            to: Severity::Info,
            reason: None,
        },
    ];

    let promoted = apply_promote_rules(drifts, &rules, None);
    let severities: Vec<Severity> = promoted.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Warning, Severity::Info, Severity::Critical]
    );
}

#[test]
fn test_enforce_sets_critical() {
    let drifts = layout_fixture();
    let rules = vec![EnforceRule {
        matcher: RuleMatch {
            file: Some("src/layouts/**".into()),
            ..Default::default()
        },
        reason: Some("layouts are shared".into()),
    }];

    let enforced = apply_enforce_rules(drifts, &rules, None);
    let severities: Vec<Severity> = enforced.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::Warning, Severity::Critical]
    );
}

#[test]
fn test_pipeline_runs_ignore_then_promote_then_enforce() {
    let config = DriftRulesConfig {
        ignore: vec![ignore(RuleMatch {
            component: Some("^Grid$".into()),
            ..Default::default()
        })],
        promote: vec![PromoteRule {
            matcher: RuleMatch {
                drift_type: Some(DriftType::HardcodedValue),
                ..Default::default()
            },
            to: Severity::Info,
            reason: None,
        }],
        enforce: vec![EnforceRule {
            matcher: RuleMatch {
                severity: Some(Severity::Info),
                component: Some("^Button$".into()),
                ..Default::default()
            },
            reason: None,
        }],
    };

    let mut warnings = 0;
    let mut sink = |_: &RuleError| warnings += 1;
    let result = apply_drift_rules(layout_fixture(), &config, Some(&mut sink));

    let summary: Vec<(&str, Severity)> = result
        .iter()
        .map(|d| (d.source.entity_name.as_str(), d.severity))
        .collect();
    // Button was promoted to info first, so the info-gated enforce rule sees it.
    assert_eq!(
        summary,
        vec![("Button", Severity::Critical), ("Flex", Severity::Info)]
    );
    assert_eq!(warnings, 0);
}

#[test]
fn test_pipeline_reports_errors_from_every_stage() {
    let bad = RuleMatch {
        component: Some("(".into()),
        ..Default::default()
    };
    let config = DriftRulesConfig {
        ignore: vec![ignore(bad.clone())],
        promote: vec![PromoteRule {
            matcher: bad.clone(),
            to: Severity::Critical,
            reason: None,
        }],
        enforce: vec![EnforceRule {
            matcher: bad,
            reason: None,
        }],
    };

    let mut warnings = 0;
    let mut sink = |_: &RuleError| warnings += 1;
    let drifts = layout_fixture();
    let result = apply_drift_rules(drifts.clone(), &config, Some(&mut sink));
    assert_eq!(result, drifts);
    assert_eq!(warnings, 3);
}

fn intent(drift_id: &str, status: IntentStatus, expires_in_days: Option<i64>) -> Intent {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Intent {
        id: format!("intent-{drift_id}"),
        intent_type: IntentType::Exception,
        status,
        related_drift_id: Some(drift_id.to_string()),
        reason: "agreed with design".into(),
        created_by: None,
        created_at: created,
        expires_at: expires_in_days.map(|d| created + Duration::days(d)),
    }
}

#[test]
fn test_intents_suppress_only_active_unexpired() {
    let drifts = layout_fixture();
    let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    let intents = vec![
        intent(&drifts[0].id, IntentStatus::Active, Some(30)),
        intent(&drifts[1].id, IntentStatus::Active, Some(5)),
        intent(&drifts[2].id, IntentStatus::Archived, None),
    ];

    let kept = apply_intents(drifts.clone(), &intents, now);
    assert_eq!(kept, vec![drifts[1].clone(), drifts[2].clone()]);
}
