//! Top-level uidrift configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CiConfig, DriftRulesConfig, FailOn};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`UIDRIFT_*`)
/// 3. Project config (`uidrift.toml` in project root)
/// 4. User config (`~/.uidrift/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UidriftConfig {
    pub analysis: AnalysisConfig,
    pub drift: DriftRulesConfig,
    pub ci: CiConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_match_confidence: Option<f64>,
    pub fail_on: Option<FailOn>,
}

impl UidriftConfig {
    /// Load configuration for the project at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(
            ignore_rules = config.drift.ignore.len(),
            promote_rules = config.drift.promote.len(),
            enforce_rules = config.drift.enforce.len(),
            fail_on = %config.ci.effective_fail_on(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(config: &UidriftConfig) -> Result<(), ConfigError> {
        if let Some(confidence) = config.analysis.min_match_confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.min_match_confidence".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        for (index, rule) in config.drift.promote.iter().enumerate() {
            if rule.matcher.is_empty() {
                tracing::warn!(index, "promote rule has no match dimension and never applies");
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.uidrift/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut UidriftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: UidriftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Scalars override only when set, rule lists
    /// override only when non-empty.
    pub fn merge(base: &mut UidriftConfig, other: &UidriftConfig) {
        let a = &other.analysis;
        if a.min_match_confidence.is_some() {
            base.analysis.min_match_confidence = a.min_match_confidence;
        }
        if a.check_naming.is_some() {
            base.analysis.check_naming = a.check_naming;
        }
        if a.check_prop_types.is_some() {
            base.analysis.check_prop_types = a.check_prop_types;
        }
        if a.check_deprecated.is_some() {
            base.analysis.check_deprecated = a.check_deprecated;
        }
        if a.check_accessibility.is_some() {
            base.analysis.check_accessibility = a.check_accessibility;
        }
        if a.check_hardcoded.is_some() {
            base.analysis.check_hardcoded = a.check_hardcoded;
        }
        if a.check_duplicates.is_some() {
            base.analysis.check_duplicates = a.check_duplicates;
        }
        if a.check_documentation.is_some() {
            base.analysis.check_documentation = a.check_documentation;
        }

        if !other.drift.ignore.is_empty() {
            base.drift.ignore = other.drift.ignore.clone();
        }
        if !other.drift.promote.is_empty() {
            base.drift.promote = other.drift.promote.clone();
        }
        if !other.drift.enforce.is_empty() {
            base.drift.enforce = other.drift.enforce.clone();
        }

        if other.ci.fail_on.is_some() {
            base.ci.fail_on = other.ci.fail_on;
        }
    }

    /// Pattern: `UIDRIFT_MIN_MATCH_CONFIDENCE`, `UIDRIFT_FAIL_ON`.
    fn apply_env_overrides(config: &mut UidriftConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("UIDRIFT_MIN_MATCH_CONFIDENCE") {
            let v = val.trim().parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                field: "UIDRIFT_MIN_MATCH_CONFIDENCE".to_string(),
                message: e.to_string(),
            })?;
            config.analysis.min_match_confidence = Some(v);
        }
        if let Ok(val) = std::env::var("UIDRIFT_FAIL_ON") {
            let v = val.parse::<FailOn>().map_err(|e| ConfigError::InvalidValue {
                field: "UIDRIFT_FAIL_ON".to_string(),
                message: e.to_string(),
            })?;
            config.ci.fail_on = Some(v);
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut UidriftConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_match_confidence {
            config.analysis.min_match_confidence = Some(v);
        }
        if let Some(v) = cli.fail_on {
            config.ci.fail_on = Some(v);
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
