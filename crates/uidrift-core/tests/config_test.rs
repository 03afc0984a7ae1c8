//! Tests for the uidrift configuration system.

use std::sync::Mutex;

use uidrift_core::config::{CliOverrides, FailOn, UidriftConfig};
use uidrift_core::errors::ConfigError;
use uidrift_core::models::{DriftType, Severity};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear UIDRIFT_ env vars and point HOME at an empty directory.
fn isolate_env(home: &std::path::Path) {
    for key in ["UIDRIFT_MIN_MATCH_CONFIDENCE", "UIDRIFT_FAIL_ON"] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_defaults_without_any_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = UidriftConfig::load(dir.path(), None).unwrap();

    assert!((config.analysis.effective_min_match_confidence() - 0.7).abs() < f64::EPSILON);
    assert!(config.analysis.effective_check_naming());
    assert!(config.analysis.effective_check_hardcoded());
    assert!(!config.analysis.effective_check_documentation());
    assert_eq!(config.ci.effective_fail_on(), FailOn::Critical);
    assert!(config.drift.is_empty());
}

/// CLI > env > project > user > defaults.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".uidrift");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[analysis]
check_documentation = true
min_match_confidence = 0.5

[ci]
fail_on = "info"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("uidrift.toml"),
        r#"
[analysis]
min_match_confidence = 0.6

[ci]
fail_on = "warning"
"#,
    )
    .unwrap();

    std::env::set_var("UIDRIFT_MIN_MATCH_CONFIDENCE", "0.8");

    let cli = CliOverrides {
        fail_on: Some(FailOn::None),
        ..Default::default()
    };
    let config = UidriftConfig::load(dir.path(), Some(&cli)).unwrap();

    // user layer survives where nothing overrides it
    assert_eq!(config.analysis.check_documentation, Some(true));
    // env beats project
    assert_eq!(config.analysis.min_match_confidence, Some(0.8));
    // CLI beats project
    assert_eq!(config.ci.effective_fail_on(), FailOn::None);

    std::env::remove_var("UIDRIFT_MIN_MATCH_CONFIDENCE");
}

#[test]
fn test_env_fail_on_overrides_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("uidrift.toml"), "[ci]\nfail_on = \"none\"\n").unwrap();
    std::env::set_var("UIDRIFT_FAIL_ON", "Warning");

    let config = UidriftConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.ci.effective_fail_on(), FailOn::Warning);

    std::env::remove_var("UIDRIFT_FAIL_ON");
}

#[test]
fn test_invalid_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("UIDRIFT_FAIL_ON", "sometimes");
    let dir = tempdir();
    let err = UidriftConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "UIDRIFT_FAIL_ON"));

    std::env::remove_var("UIDRIFT_FAIL_ON");
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("uidrift.toml"), "[analysis\nbroken").unwrap();
    let err = UidriftConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_confidence_out_of_range_fails_validation() {
    let config = UidriftConfig::from_toml("[analysis]\nmin_match_confidence = 1.5\n").unwrap();
    let err = UidriftConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "analysis.min_match_confidence");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_drift_rules_parse() {
    let config = UidriftConfig::from_toml(
        r#"
[[drift.ignore]]
type = "hardcoded-value"
file = "src/layouts/**"
reason = "layout primitives"

[[drift.promote]]
type = "naming-inconsistency"
component = "^Legacy"
to = "warning"

[[drift.enforce]]
type = "accessibility-conflict"
"#,
    )
    .unwrap();

    assert_eq!(config.drift.ignore.len(), 1);
    let ignore = &config.drift.ignore[0];
    assert_eq!(ignore.matcher.drift_type, Some(DriftType::HardcodedValue));
    assert_eq!(ignore.matcher.file.as_deref(), Some("src/layouts/**"));
    assert_eq!(ignore.reason.as_deref(), Some("layout primitives"));

    let promote = &config.drift.promote[0];
    assert_eq!(promote.to, Severity::Warning);
    assert_eq!(promote.matcher.component.as_deref(), Some("^Legacy"));

    assert_eq!(
        config.drift.enforce[0].matcher.drift_type,
        Some(DriftType::AccessibilityConflict)
    );
}

#[test]
fn test_reason_only_rule_is_empty() {
    let config = UidriftConfig::from_toml("[[drift.ignore]]\nreason = \"noop\"\n").unwrap();
    assert!(config.drift.ignore[0].matcher.is_empty());
}

#[test]
fn test_toml_round_trip() {
    let mut config = UidriftConfig::from_toml(
        "[analysis]\ncheck_duplicates = false\n\n[[drift.ignore]]\ntype = \"orphaned-token\"\n",
    )
    .unwrap();
    config.ci.fail_on = Some(FailOn::Info);

    let text = config.to_toml().unwrap();
    let back = UidriftConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_merge_keeps_base_when_other_unset() {
    let mut base = UidriftConfig::from_toml("[ci]\nfail_on = \"warning\"\n").unwrap();
    let other = UidriftConfig::from_toml("[analysis]\ncheck_naming = false\n").unwrap();
    UidriftConfig::merge(&mut base, &other);

    assert_eq!(base.ci.fail_on, Some(FailOn::Warning));
    assert_eq!(base.analysis.check_naming, Some(false));
}
