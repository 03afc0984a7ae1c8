//! Stable error codes for consumers outside the Rust API.

/// Every error enum implements this to expose a structured code string
/// for reporters and CLI wrappers.
pub trait UidriftErrorCode {
    /// Returns the error code string (e.g. `"CONFIG_ERROR"`).
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
