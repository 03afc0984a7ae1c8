//! # uidrift-core
//!
//! Foundation crate for the uidrift design-drift engine.
//! Defines the component/token/drift model, deterministic identifiers,
//! errors, config, tracing, and constants. Scanners and the analysis crate
//! exchange data exclusively through these types.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;

pub use config::UidriftConfig;
pub use errors::{UidriftError, UidriftErrorCode};
pub use models::{
    Component, DesignToken, DriftSignal, DriftSource, DriftSummary, DriftType, Intent,
    Severity,
};
