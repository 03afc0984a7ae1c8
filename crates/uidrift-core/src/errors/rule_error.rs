//! Drift rule compilation errors.
//!
//! These are never fatal: the rule engine hands them to a warning callback
//! and keeps processing the remaining drifts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error_code::{self, UidriftErrorCode};

/// The rule dimension a compile error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleField {
    File,
    Component,
    Token,
    Value,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Component => "component",
            Self::Token => "token",
            Self::Value => "value",
        })
    }
}

/// A rule field whose pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("invalid regex in rule {rule_index} field '{field}' ('{pattern}'): {message}")]
    InvalidRegex {
        rule_index: usize,
        field: RuleField,
        pattern: String,
        message: String,
    },

    #[error("invalid glob in rule {rule_index} field '{field}' ('{pattern}'): {message}")]
    InvalidGlob {
        rule_index: usize,
        field: RuleField,
        pattern: String,
        message: String,
    },
}

impl RuleError {
    /// The offending rule's position in its rule list.
    pub fn rule_index(&self) -> usize {
        match self {
            Self::InvalidRegex { rule_index, .. } | Self::InvalidGlob { rule_index, .. } => {
                *rule_index
            }
        }
    }

    pub fn field(&self) -> RuleField {
        match self {
            Self::InvalidRegex { field, .. } | Self::InvalidGlob { field, .. } => *field,
        }
    }
}

impl UidriftErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
