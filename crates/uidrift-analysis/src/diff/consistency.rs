//! Single-set consistency analysis over one component list.
//!
//! The aggregate maps (naming histogram, prop types by name, handler
//! prefixes) are built once per call and only read afterwards.

use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;
use serde_json::Value;

use uidrift_core::models::{
    normalize_component_name, Component, DriftDetails, DriftSignal, DriftSource, DriftType,
    Severity,
};
use uidrift_core::tracing::metrics::ANALYZE_COMPONENTS_TIME;
use uidrift_core::types::collections::FxHashMap;

use super::hardcoded::hardcoded_drifts;
use super::naming::{classify_name, convert_to_pattern, rename_handler, NamingPattern};
use super::types::AnalysisOptions;

/// A naming pattern must cover more than this share to be dominant.
pub const NAMING_DOMINANCE: f64 = 0.6;
/// Minimum absolute support for the dominant naming pattern.
pub const NAMING_MIN_SUPPORT: usize = 3;
/// Minimum relative support for the dominant naming pattern.
pub const NAMING_MIN_SUPPORT_RATIO: f64 = 0.1;

/// Observations of one prop name needed before types are compared.
pub const PROP_TYPE_MIN_OBSERVATIONS: usize = 3;
/// Share a prop type needs to be the expected type.
pub const PROP_TYPE_DOMINANCE: f64 = 0.7;
/// Example component names kept per prop type.
const PROP_TYPE_EXAMPLES: usize = 3;

/// Click/press handler props needed before prefixes are compared.
pub const HANDLER_MIN_PROPS: usize = 5;
/// Share a handler prefix needs to be the convention.
pub const HANDLER_DOMINANCE: f64 = 0.7;

/// Minimum base-name length for duplicate grouping.
pub const DUPLICATE_MIN_BASE_LEN: usize = 3;

/// Case-insensitive substrings marking interactive controls.
pub const INTERACTIVE_CONTROLS: &[&str] = &["button", "link", "input", "select", "checkbox", "radio"];

/// Run every enabled check over `components`.
pub fn analyze_components(components: &[Component], options: &AnalysisOptions) -> Vec<DriftSignal> {
    let start = Instant::now();
    let mut drifts = Vec::new();

    if options.check_naming {
        drifts.extend(naming_pattern_drifts(components));
        drifts.extend(handler_naming_drifts(components));
    }
    if options.check_prop_types {
        drifts.extend(prop_type_drifts(components));
    }

    for component in components {
        if options.check_deprecated && component.metadata.deprecated {
            drifts.push(deprecated_drift(component));
        }
        if options.check_accessibility {
            if let Some(drift) = accessibility_drift(component) {
                drifts.push(drift);
            }
        }
        if options.check_hardcoded {
            drifts.extend(hardcoded_drifts(component, &options.available_tokens));
        }
        if options.check_documentation && !has_documentation(component) {
            drifts.push(DriftSignal::new(
                DriftType::MissingDocumentation,
                Severity::Info,
                DriftSource::component(component),
                format!("{} has no documentation", component.name),
            ));
        }
    }

    if options.check_duplicates {
        drifts.extend(duplicate_drifts(components));
    }

    tracing::debug!(
        components = components.len(),
        drifts = drifts.len(),
        { ANALYZE_COMPONENTS_TIME } = start.elapsed().as_micros() as u64,
        "component analysis complete"
    );

    drifts
}

fn has_documentation(component: &Component) -> bool {
    component
        .metadata
        .documentation
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty())
}

/// Flag names that break a dominant, well-supported naming pattern.
fn naming_pattern_drifts(components: &[Component]) -> Vec<DriftSignal> {
    let total = components.len();
    if total == 0 {
        return Vec::new();
    }

    let patterns: Vec<NamingPattern> = components.iter().map(|c| classify_name(&c.name)).collect();
    let mut histogram: FxHashMap<NamingPattern, usize> = FxHashMap::default();
    for p in &patterns {
        *histogram.entry(*p).or_default() += 1;
    }

    let Some((dominant, support)) = histogram
        .iter()
        .filter(|(p, _)| **p != NamingPattern::Other)
        .map(|(p, n)| (*p, *n))
        .find(|(_, n)| *n as f64 > total as f64 * NAMING_DOMINANCE)
    else {
        return Vec::new();
    };

    let min_support = (NAMING_MIN_SUPPORT as f64).max(total as f64 * NAMING_MIN_SUPPORT_RATIO);
    if support as f64 <= min_support {
        return Vec::new();
    }

    components
        .iter()
        .zip(&patterns)
        .filter(|(_, p)| **p != dominant)
        .map(|(c, p)| {
            let suggested = convert_to_pattern(&c.name, dominant);
            DriftSignal::new(
                DriftType::NamingInconsistency,
                Severity::Info,
                DriftSource::component(c),
                format!(
                    "{} uses {} but {} of {} components use {}",
                    c.name, p, support, total, dominant
                ),
            )
            .qualified("naming")
            .with_details(DriftDetails {
                expected: Some(Value::String(dominant.to_string())),
                actual: Some(Value::String(p.to_string())),
                suggestions: Some(vec![format!("Rename {} to {}", c.name, suggested)]),
                ..Default::default()
            })
        })
        .collect()
}

struct TypeUsage {
    count: usize,
    examples: Vec<String>,
}

/// Flag props whose type departs from the codebase-wide dominant type.
fn prop_type_drifts(components: &[Component]) -> Vec<DriftSignal> {
    // lowercase prop name -> type -> usage, types in first-seen order
    let mut by_name: FxHashMap<String, Vec<(String, TypeUsage)>> = FxHashMap::default();
    for c in components {
        for prop in &c.props {
            let types = by_name.entry(prop.name.to_lowercase()).or_default();
            let ty = prop.prop_type.trim();
            match types.iter_mut().find(|(t, _)| t == ty) {
                Some((_, usage)) => {
                    usage.count += 1;
                    if usage.examples.len() < PROP_TYPE_EXAMPLES {
                        usage.examples.push(c.name.clone());
                    }
                }
                None => types.push((
                    ty.to_string(),
                    TypeUsage {
                        count: 1,
                        examples: vec![c.name.clone()],
                    },
                )),
            }
        }
    }

    // lowercase prop name -> (dominant type, its usage, total observations)
    let mut expected: FxHashMap<&str, (&str, &TypeUsage, usize)> = FxHashMap::default();
    for (name, types) in &by_name {
        let total: usize = types.iter().map(|(_, u)| u.count).sum();
        if total < PROP_TYPE_MIN_OBSERVATIONS {
            continue;
        }
        if let Some((ty, usage)) = types.iter().max_by_key(|(_, u)| u.count) {
            if usage.count as f64 / total as f64 >= PROP_TYPE_DOMINANCE {
                expected.insert(name.as_str(), (ty.as_str(), usage, total));
            }
        }
    }

    let mut drifts = Vec::new();
    for c in components {
        for prop in &c.props {
            let key = prop.name.to_lowercase();
            let Some((ty, usage, total)) = expected.get(key.as_str()) else {
                continue;
            };
            let actual = prop.prop_type.trim();
            if actual == *ty {
                continue;
            }
            drifts.push(
                DriftSignal::new(
                    DriftType::SemanticMismatch,
                    Severity::Warning,
                    DriftSource::component(c),
                    format!(
                        "Prop '{}' on {} is '{}' but {} of {} uses are '{}' (e.g. {})",
                        prop.name,
                        c.name,
                        actual,
                        usage.count,
                        total,
                        ty,
                        usage.examples.join(", ")
                    ),
                )
                .qualified(&format!("prop-type:{key}"))
                .with_details(DriftDetails {
                    expected: Some(Value::String(ty.to_string())),
                    actual: Some(Value::String(actual.to_string())),
                    suggestions: Some(vec![format!(
                        "Change '{}' to '{}' to match the rest of the codebase",
                        prop.name, ty
                    )]),
                    ..Default::default()
                }),
            );
        }
    }
    drifts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandlerPrefix {
    On,
    Handle,
    Other,
}

impl HandlerPrefix {
    fn of(prop: &str) -> Self {
        let lower = prop.to_lowercase();
        if lower.starts_with("handle") {
            Self::Handle
        } else if lower.starts_with("on") {
            Self::On
        } else {
            Self::Other
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Handle => "handle",
            Self::Other => "",
        }
    }
}

/// Flag click/press handler props that break the dominant prefix.
fn handler_naming_drifts(components: &[Component]) -> Vec<DriftSignal> {
    let handlers: Vec<(&Component, &str)> = components
        .iter()
        .flat_map(|c| c.props.iter().map(move |p| (c, p.name.as_str())))
        .filter(|(_, name)| {
            let lower = name.to_lowercase();
            lower.contains("click") || lower.contains("press")
        })
        .collect();

    if handlers.len() < HANDLER_MIN_PROPS {
        return Vec::new();
    }

    let total = handlers.len() as f64;
    let count = |prefix: HandlerPrefix| {
        handlers
            .iter()
            .filter(|(_, n)| HandlerPrefix::of(n) == prefix)
            .count() as f64
    };
    let dominant = if count(HandlerPrefix::On) / total >= HANDLER_DOMINANCE {
        HandlerPrefix::On
    } else if count(HandlerPrefix::Handle) / total >= HANDLER_DOMINANCE {
        HandlerPrefix::Handle
    } else {
        return Vec::new();
    };

    handlers
        .into_iter()
        .filter(|(_, name)| HandlerPrefix::of(name) != dominant)
        .map(|(c, name)| {
            let suggested = rename_handler(name, dominant.as_str());
            DriftSignal::new(
                DriftType::NamingInconsistency,
                Severity::Info,
                DriftSource::component(c),
                format!(
                    "Handler prop '{}' on {} does not use the '{}' prefix used across the codebase",
                    name,
                    c.name,
                    dominant.as_str()
                ),
            )
            .qualified(&format!("prop-naming:{name}"))
            .with_details(DriftDetails {
                expected: Some(Value::String(suggested.clone())),
                actual: Some(Value::String(name.to_string())),
                suggestions: Some(vec![format!("Rename '{name}' to '{suggested}'")]),
                ..Default::default()
            })
        })
        .collect()
}

fn deprecated_drift(component: &Component) -> DriftSignal {
    let message = match component
        .metadata
        .deprecation_reason
        .as_deref()
        .filter(|r| !r.trim().is_empty())
    {
        Some(reason) => format!("{} is deprecated: {}", component.name, reason),
        None => format!(
            "{} is deprecated. Migrate its usages to the replacement component.",
            component.name
        ),
    };
    DriftSignal::new(
        DriftType::DeprecatedPattern,
        Severity::Warning,
        DriftSource::component(component),
        message,
    )
}

fn is_interactive(name: &str) -> bool {
    let lower = name.to_lowercase();
    INTERACTIVE_CONTROLS.iter().any(|c| lower.contains(c))
}

fn has_accessible_label(component: &Component) -> bool {
    component.props.iter().any(|p| {
        let lower = p.name.to_lowercase();
        lower == "children" || (lower.contains("aria") && lower.contains("label"))
    })
}

/// Interactive controls with neither an aria label nor children surface
/// their accessibility issues as one critical signal.
fn accessibility_drift(component: &Component) -> Option<DriftSignal> {
    let issues = component.accessibility_issues();
    if issues.is_empty() || !is_interactive(&component.name) || has_accessible_label(component) {
        return None;
    }
    Some(
        DriftSignal::new(
            DriftType::AccessibilityConflict,
            Severity::Critical,
            DriftSource::component(component),
            format!(
                "{} has {} accessibility issue(s): {}",
                component.name,
                issues.len(),
                issues.join("; ")
            ),
        )
        .with_details(DriftDetails {
            suggestions: Some(vec![
                "Add an aria-label prop or render accessible children".to_string(),
            ]),
            ..Default::default()
        }),
    )
}

fn version_suffix() -> Option<&'static Regex> {
    static SUFFIX: OnceLock<Option<Regex>> = OnceLock::new();
    SUFFIX
        .get_or_init(|| Regex::new(r"(New|Old|V\d+|Legacy|Updated|Deprecated)$").ok())
        .as_ref()
}

/// Base name for duplicate grouping: version-like suffix and trailing
/// digits removed, then normalized.
pub fn duplicate_base_name(name: &str) -> String {
    let trimmed = name.trim();
    let stripped = match version_suffix() {
        Some(re) => re.replace(trimmed, "").into_owned(),
        None => trimmed.to_string(),
    };
    let stripped = stripped.trim_end_matches(|c: char| c.is_ascii_digit());
    normalize_component_name(stripped)
}

/// One warning per group of two or more components sharing a base name.
fn duplicate_drifts(components: &[Component]) -> Vec<DriftSignal> {
    let mut groups: Vec<(String, Vec<&Component>)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    for c in components {
        let base = duplicate_base_name(&c.name);
        if base.chars().count() < DUPLICATE_MIN_BASE_LEN {
            continue;
        }
        match index.get(&base) {
            Some(&i) => groups[i].1.push(c),
            None => {
                index.insert(base.clone(), groups.len());
                groups.push((base, vec![c]));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(base, members)| {
            let names: Vec<&str> = members.iter().map(|c| c.name.as_str()).collect();
            DriftSignal::new(
                DriftType::NamingInconsistency,
                Severity::Warning,
                DriftSource::component(members[0]),
                format!(
                    "Possible duplicate components: {}",
                    names.join(", ")
                ),
            )
            .qualified(&format!("duplicate:{base}"))
            .with_details(DriftDetails {
                affected_files: Some(members.iter().map(|c| c.source.location()).collect()),
                suggestions: Some(vec![format!(
                    "Merge {} into a single component",
                    names.join(", ")
                )]),
                ..Default::default()
            })
        })
        .collect()
}
