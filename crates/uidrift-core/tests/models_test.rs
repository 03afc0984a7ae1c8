//! Tests for the component/token/drift/intent model and identity helpers.

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use uidrift_core::models::{
    create_drift_id, get_highest_severity, intent_applies, sort_drifts_by_severity,
    AccessibilityInfo, Component, ComponentSource, DesignToken, DriftDetails, DriftSignal,
    DriftSource, DriftSummary, DriftType, HardcodedKind, HardcodedValue, Intent, IntentStatus,
    IntentType, PropDefinition, Severity, TokenCategory, TokenSource, TokenValue,
};

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn button() -> Component {
    let mut c = Component::new(
        "Button",
        ComponentSource::React {
            path: "src/components/Button.tsx".into(),
            export_name: "Button".into(),
            line: Some(12),
        },
        fixed_time(),
    );
    c.props.push(PropDefinition::new("variant", "'primary' | 'secondary'", false));
    c.props.push(PropDefinition::new("onClick", "() => void", true));
    c.metadata.accessibility = Some(AccessibilityInfo {
        issues: vec!["missing focus ring".into()],
    });
    c.metadata.hardcoded_values.push(HardcodedValue {
        kind: HardcodedKind::Color,
        value: "#ff0000".into(),
        property: "color".into(),
        location: "src/components/Button.tsx:20".into(),
    });
    c
}

#[test]
fn test_component_id_is_derived_from_source_and_name() {
    let c = button();
    assert_eq!(c.id, "react:src/components/Button.tsx:Button");
    assert_eq!(c.source.location(), "src/components/Button.tsx:12");
    assert_eq!(c.source.side_label(), "code");
}

#[test]
fn test_figma_source_location() {
    let source = ComponentSource::Figma {
        file_key: "abc".into(),
        node_id: "1:2".into(),
        url: None,
    };
    assert!(source.is_design());
    assert_eq!(source.location(), "figma:abc/1:2");
}

#[test]
fn test_component_json_round_trip() {
    let c = button();
    let text = serde_json::to_string(&c).unwrap();
    let back: Component = serde_json::from_str(&text).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_component_source_is_tagged_by_type() {
    let value = serde_json::to_value(button().source).unwrap();
    assert_eq!(value["type"], "react");
    assert_eq!(value["exportName"], "Button");
}

#[test]
fn test_token_json_round_trip() {
    let token = DesignToken::new(
        "--space-md",
        TokenCategory::Spacing,
        TokenValue::Spacing {
            value: 16.0,
            unit: "px".into(),
        },
        TokenSource::Css {
            path: "tokens.css".into(),
            line: Some(4),
        },
        fixed_time(),
    );
    let text = serde_json::to_string(&token).unwrap();
    let back: DesignToken = serde_json::from_str(&text).unwrap();
    assert_eq!(back, token);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["value"], json!({"type": "spacing", "value": 16.0, "unit": "px"}));
}

#[test]
fn test_drift_json_round_trip_preserves_id_and_dates() {
    let c = button();
    let drift = DriftSignal::new(
        DriftType::HardcodedValue,
        Severity::Warning,
        DriftSource::component(&c),
        "Button has 1 hardcoded color",
    )
    .qualified("color")
    .with_details(DriftDetails {
        actual: Some(json!("#ff0000")),
        occurrences: Some(c.metadata.hardcoded_values.clone()),
        ..Default::default()
    })
    .with_detected_at(fixed_time());

    let text = serde_json::to_string(&drift).unwrap();
    let back: DriftSignal = serde_json::from_str(&text).unwrap();
    assert_eq!(back, drift);
    assert_eq!(back.id, "drift:hardcoded-value:react:src/components/Button.tsx:Button:color");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["type"], "hardcoded-value");
    assert_eq!(value["detectedAt"], "2024-03-01T12:00:00Z");
}

#[test]
fn test_drift_ids_do_not_depend_on_time() {
    let c = button();
    let a = DriftSignal::new(
        DriftType::DeprecatedPattern,
        Severity::Warning,
        DriftSource::component(&c),
        "a",
    );
    let b = DriftSignal::new(
        DriftType::DeprecatedPattern,
        Severity::Warning,
        DriftSource::component(&c),
        "b",
    )
    .with_detected_at(fixed_time());
    assert_eq!(a.id, b.id);
}

#[test]
fn test_with_target_qualifies_id_with_target_entity() {
    let code = button();
    let design = Component::new(
        "Button",
        ComponentSource::Figma {
            file_key: "f".into(),
            node_id: "n".into(),
            url: None,
        },
        fixed_time(),
    );
    let drift = DriftSignal::new(
        DriftType::SemanticMismatch,
        Severity::Warning,
        DriftSource::component(&code),
        "mismatch",
    )
    .with_target(DriftSource::component(&design));
    assert_eq!(
        drift.id,
        create_drift_id(DriftType::SemanticMismatch, &code.id, Some(&design.id))
    );
}

#[test]
fn test_drift_type_parses_from_kebab_case() {
    for t in DriftType::all() {
        assert_eq!(t.as_str().parse::<DriftType>().unwrap(), *t);
    }
    assert!("not-a-type".parse::<DriftType>().is_err());
}

#[test]
fn test_severity_ordering_and_highest() {
    assert!(Severity::Critical < Severity::Warning);
    assert!(Severity::Warning < Severity::Info);
    assert_eq!(
        get_highest_severity([Severity::Info, Severity::Warning, Severity::Info]),
        Severity::Warning
    );
    assert_eq!(
        get_highest_severity([Severity::Warning, Severity::Critical]),
        Severity::Critical
    );
    assert_eq!(get_highest_severity(Vec::new()), Severity::Info);
}

#[test]
fn test_sort_drifts_by_severity_is_stable() {
    let c = button();
    let make = |sev: Severity, msg: &str| {
        DriftSignal::new(DriftType::HardcodedValue, sev, DriftSource::component(&c), msg)
    };
    let mut drifts = vec![
        make(Severity::Info, "i1"),
        make(Severity::Critical, "c1"),
        make(Severity::Warning, "w1"),
        make(Severity::Info, "i2"),
        make(Severity::Critical, "c2"),
    ];
    sort_drifts_by_severity(&mut drifts);
    let order: Vec<&str> = drifts.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(order, ["c1", "c2", "w1", "i1", "i2"]);

    let summary = DriftSummary::from_drifts(&drifts);
    assert_eq!(
        summary,
        DriftSummary {
            total: 5,
            critical: 2,
            warning: 1,
            info: 2
        }
    );
}

#[test]
fn test_token_value_matches_by_value() {
    let a = TokenValue::Color { hex: "#FFF".into() };
    let b = TokenValue::Color {
        hex: "#ffffff".into(),
    };
    assert!(a.matches(&b));
    assert!(!a.matches(&TokenValue::Raw {
        value: "#ffffff".into()
    }));
}

fn intent(status: IntentStatus, expires_in: Option<i64>) -> Intent {
    Intent {
        id: "intent-1".into(),
        intent_type: IntentType::Exception,
        status,
        related_drift_id: Some("drift:x".into()),
        reason: "accepted".into(),
        created_by: None,
        created_at: fixed_time(),
        expires_at: expires_in.map(|d| fixed_time() + Duration::days(d)),
    }
}

#[test]
fn test_intent_applies_only_when_active_unexpired_and_related() {
    let now = fixed_time() + Duration::days(1);

    assert!(intent_applies(&intent(IntentStatus::Active, None), "drift:x", now));
    assert!(intent_applies(&intent(IntentStatus::Active, Some(2)), "drift:x", now));
    assert!(!intent_applies(&intent(IntentStatus::Active, Some(1)), "drift:x", now));
    assert!(!intent_applies(&intent(IntentStatus::Archived, None), "drift:x", now));
    assert!(!intent_applies(&intent(IntentStatus::Active, None), "drift:y", now));
}
