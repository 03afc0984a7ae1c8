//! Shared constants for the uidrift engine.

/// uidrift version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "uidrift.toml";

/// User config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".uidrift";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "UIDRIFT_LOG";

/// Default filter when `UIDRIFT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "uidrift_core=info,uidrift_analysis=info";

/// Default minimum confidence for a fuzzy component match.
pub const DEFAULT_MIN_MATCH_CONFIDENCE: f64 = 0.7;

/// Number of drifts reported verbatim in a CI result.
pub const CI_TOP_ISSUES: usize = 10;

/// Prefix of every drift signal id.
pub const DRIFT_ID_PREFIX: &str = "drift";
