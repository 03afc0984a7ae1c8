//! CI gate configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Lowest severity that fails a CI run. Ordered loosest to strictest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    None,
    #[default]
    Critical,
    Warning,
    Info,
}

impl FailOn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailOn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(ModelError::UnknownVariant {
                kind: "fail-on level",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CiConfig {
    /// Failure threshold. Default: critical.
    pub fail_on: Option<FailOn>,
}

impl CiConfig {
    pub fn effective_fail_on(&self) -> FailOn {
        self.fail_on.unwrap_or_default()
    }
}
