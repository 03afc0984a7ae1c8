//! Model parsing and serialization errors.

use super::error_code::{self, UidriftErrorCode};

/// Errors raised when converting model values from external representations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UidriftErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
