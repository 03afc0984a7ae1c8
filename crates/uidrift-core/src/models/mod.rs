//! Design-drift domain model.
//!
//! Scanners produce [`Component`] and [`DesignToken`] values; the analysis
//! crate turns them into [`DriftSignal`]s. All types round-trip through JSON
//! with camelCase field names and RFC 3339 timestamps.

pub mod component;
pub mod drift;
pub mod identifiers;
pub mod intent;
pub mod token;

pub use component::{
    AccessibilityInfo, Component, ComponentMetadata, ComponentSource, HardcodedKind,
    HardcodedValue, PropDefinition, VariantDefinition,
};
pub use drift::{
    get_highest_severity, sort_drifts_by_severity, DriftDetails, DriftSignal, DriftSource,
    DriftSummary, DriftType, EntityType, GitContext, Severity, TokenSuggestion,
};
pub use identifiers::{
    create_component_id, create_drift_id, create_token_id, normalize_component_name,
    normalize_token_name,
};
pub use intent::{intent_applies, Intent, IntentStatus, IntentType};
pub use token::{normalize_hex, DesignToken, TokenCategory, TokenMetadata, TokenSource, TokenValue};
