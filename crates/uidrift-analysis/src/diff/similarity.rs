//! Edit-distance and set-overlap similarity, and the weighted component score.

use uidrift_core::models::{normalize_component_name, Component};
use uidrift_core::types::collections::FxHashSet;

/// Weight of normalized-name similarity in [`component_similarity`].
pub const NAME_WEIGHT: f64 = 0.4;
/// Weight of prop-name overlap.
pub const PROP_WEIGHT: f64 = 0.3;
/// Weight of variant-name overlap.
pub const VARIANT_WEIGHT: f64 = 0.2;
/// Weight of dependency overlap.
pub const DEPENDENCY_WEIGHT: f64 = 0.1;

/// Fuzzy matches strictly above this are classified `similar`, else `partial`.
pub const SIMILAR_THRESHOLD: f64 = 0.9;

/// Levenshtein distance over Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row DP.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// `1 - distance / max(len_a, len_b)`; two empty strings are identical.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// J(A, B) = |A ∩ B| / |A ∪ B|. Two empty sets are identical (1.0).
pub fn jaccard_similarity(set_a: &FxHashSet<String>, set_b: &FxHashSet<String>) -> f64 {
    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.union(set_b).count();
    intersection as f64 / union as f64
}

fn lowercase_set<'a>(items: impl Iterator<Item = &'a str>) -> FxHashSet<String> {
    items.map(str::to_lowercase).collect()
}

/// Weighted similarity of two components in `[0, 1]`.
pub fn component_similarity(a: &Component, b: &Component) -> f64 {
    let name = string_similarity(
        &normalize_component_name(&a.name),
        &normalize_component_name(&b.name),
    );
    let props = jaccard_similarity(
        &lowercase_set(a.props.iter().map(|p| p.name.as_str())),
        &lowercase_set(b.props.iter().map(|p| p.name.as_str())),
    );
    let variants = jaccard_similarity(
        &lowercase_set(a.variants.iter().map(|v| v.name.as_str())),
        &lowercase_set(b.variants.iter().map(|v| v.name.as_str())),
    );
    let dependencies = jaccard_similarity(
        &lowercase_set(a.dependencies.iter().map(String::as_str)),
        &lowercase_set(b.dependencies.iter().map(String::as_str)),
    );

    NAME_WEIGHT * name + PROP_WEIGHT * props + VARIANT_WEIGHT * variants + DEPENDENCY_WEIGHT * dependencies
}
