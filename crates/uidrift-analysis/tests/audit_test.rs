//! Tests for the audit report and close-match detection.

use chrono::{TimeZone, Utc};

use uidrift_analysis::audit::{
    find_close_matches, generate_audit_report, AuditCategory, AuditValue, CloseMatchKind,
    ValueCount,
};
use uidrift_core::models::{DesignToken, TokenCategory, TokenSource, TokenValue};

fn value(category: AuditCategory, value: &str, file: &str, line: u32) -> AuditValue {
    AuditValue {
        category,
        value: value.to_string(),
        file: file.to_string(),
        line,
    }
}

#[test]
fn test_empty_report_is_perfect() {
    let report = generate_audit_report(&[]);
    assert_eq!(report.score, 100);
    assert_eq!(report.total_values, 0);
    assert_eq!(report.unique_values, 0);
    assert!(report.categories.is_empty());
    assert!(report.worst_files.is_empty());
}

#[test]
fn test_report_groups_by_category_and_file() {
    let values = vec![
        value(AuditCategory::Color, "#fff", "src/a.tsx", 1),
        value(AuditCategory::Spacing, "4px", "src/a.tsx", 2),
        value(AuditCategory::Color, "#000", "src/b.tsx", 1),
        value(AuditCategory::Color, "#fff", "src/a.tsx", 3),
        value(AuditCategory::Spacing, "4px", "src/a.tsx", 4),
        value(AuditCategory::Color, "#fff", "src/a.tsx", 5),
    ];
    let report = generate_audit_report(&values);

    assert_eq!(report.total_values, 6);
    assert_eq!(report.unique_values, 3);

    let color = &report.categories[0];
    assert_eq!(color.category, AuditCategory::Color);
    assert_eq!(color.unique_count, 2);
    assert_eq!(color.total_count, 4);
    assert_eq!(
        color.most_common,
        vec![
            ValueCount {
                value: "#fff".into(),
                count: 3
            },
            ValueCount {
                value: "#000".into(),
                count: 1
            },
        ]
    );

    let spacing = &report.categories[1];
    assert_eq!(spacing.category, AuditCategory::Spacing);
    assert_eq!((spacing.unique_count, spacing.total_count), (1, 2));

    assert_eq!(report.worst_files[0].file, "src/a.tsx");
    assert_eq!(report.worst_files[0].count, 5);
    assert_eq!(report.worst_files[1].file, "src/b.tsx");

    // no excess unique values, volume penalty 0.6
    assert_eq!(report.score, 99);
}

#[test]
fn test_report_penalizes_excess_unique_values() {
    let values: Vec<AuditValue> = (0..14)
        .map(|i| value(AuditCategory::Color, &format!("#0000{i:02}"), "src/a.tsx", i))
        .collect();
    let report = generate_audit_report(&values);
    // 100 - 2 * (14 - 12) - 1.4
    assert_eq!(report.score, 95);
}

#[test]
fn test_most_common_and_worst_files_are_capped() {
    let values: Vec<AuditValue> = (0..30)
        .map(|i| value(AuditCategory::Other, &format!("v{i}"), &format!("src/f{i}.tsx"), 1))
        .collect();
    let report = generate_audit_report(&values);
    assert_eq!(report.categories[0].most_common.len(), 5);
    assert_eq!(report.worst_files.len(), 10);
}

fn token(name: &str, value: TokenValue) -> DesignToken {
    DesignToken::new(
        name,
        TokenCategory::Other,
        value,
        TokenSource::Tailwind {
            path: "tailwind.config.js".into(),
        },
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

#[test]
fn test_color_close_matches_exclude_exact() {
    let tokens = vec![token("blue-500", TokenValue::Color { hex: "#3b82f6".into() })];
    let found = ["#3b82f7", "#3B82F6", "#ff0000"];

    let matches = find_close_matches(&found, &tokens, CloseMatchKind::Color);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, "#3b82f7");
    assert_eq!(matches[0].token_name, "blue-500");
    assert_eq!(matches[0].distance, 1.0);
}

#[test]
fn test_spacing_close_matches_convert_units() {
    let tokens = vec![token(
        "space-4",
        TokenValue::Spacing {
            value: 16.0,
            unit: "px".into(),
        },
    )];
    let found = ["15px", "16px", "1rem", "0.9375rem", "24px"];

    let matches = find_close_matches(&found, &tokens, CloseMatchKind::Spacing);
    let values: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, vec!["15px", "0.9375rem"]);
}

#[test]
fn test_close_matches_ignore_incomparable_tokens() {
    let tokens = vec![token("blue-500", TokenValue::Color { hex: "#3b82f6".into() })];
    let matches = find_close_matches(&["15px"], &tokens, CloseMatchKind::Spacing);
    assert!(matches.is_empty());
}
