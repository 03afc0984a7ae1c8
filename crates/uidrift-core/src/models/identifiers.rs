//! Deterministic identity and name normalisation.
//!
//! Ids are pure functions of stable inputs so that re-running detection on
//! the same inputs yields the same ids, which ignore rules and downstream
//! dedup rely on.

use super::component::ComponentSource;
use super::drift::DriftType;
use super::token::TokenSource;
use crate::constants::DRIFT_ID_PREFIX;

/// `"{source-type}:{locator}:{name}"`.
pub fn create_component_id(source: &ComponentSource, name: &str) -> String {
    format!("{}:{}:{}", source.kind(), source.locator(), name)
}

/// `"{source-type}:{locator}:{name}"`.
pub fn create_token_id(source: &TokenSource, name: &str) -> String {
    format!("{}:{}:{}", source.kind(), source.locator(), name)
}

/// `"drift:{type}:{source_id}"`, with `":{qualifier}"` appended when given.
///
/// The qualifier is the target entity id for two-sided signals, or a short
/// discriminator (`"prop:onClick"`) when one entity yields several signals of
/// the same type.
pub fn create_drift_id(drift_type: DriftType, source_id: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(q) => format!("{DRIFT_ID_PREFIX}:{drift_type}:{source_id}:{q}"),
        None => format!("{DRIFT_ID_PREFIX}:{drift_type}:{source_id}"),
    }
}

/// Case- and separator-insensitive component name (`Primary-Button` -> `primarybutton`).
pub fn normalize_component_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | '/') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Like [`normalize_component_name`], also dropping CSS/SCSS/LESS prefixes.
pub fn normalize_token_name(name: &str) -> String {
    let trimmed = name
        .trim()
        .trim_start_matches("--")
        .trim_start_matches(['$', '@']);
    normalize_component_name(trimmed)
}
