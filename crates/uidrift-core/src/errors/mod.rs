//! Error handling for uidrift.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod rule_error;

pub use config_error::ConfigError;
pub use error_code::UidriftErrorCode;
pub use model_error::ModelError;
pub use rule_error::{RuleError, RuleField};

use error_code::INTERNAL_ERROR;

/// Aggregate error for callers that drive several subsystems.
#[derive(Debug, thiserror::Error)]
pub enum UidriftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UidriftErrorCode for UidriftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }
}
