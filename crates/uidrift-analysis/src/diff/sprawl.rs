//! Multiple UI frameworks in one codebase.

use serde_json::Value;

use uidrift_core::models::{DriftDetails, DriftSignal, DriftSource, DriftType, EntityType, Severity};

use super::types::DetectedFramework;

/// Framework names counted as UI frameworks, lowercase.
pub const KNOWN_UI_FRAMEWORKS: &[&str] = &[
    "react", "vue", "svelte", "angular", "solid", "preact", "lit", "stencil", "qwik", "ember",
    "alpine",
];

/// Entity id used for project-wide signals.
const PROJECT_ENTITY: &str = "project";

/// One warning when more than one distinct known UI framework is present.
/// The first detected framework is suggested as the primary.
pub fn check_framework_sprawl(frameworks: &[DetectedFramework]) -> Option<DriftSignal> {
    let mut ui: Vec<&DetectedFramework> = Vec::new();
    for f in frameworks {
        let name = f.name.trim().to_ascii_lowercase();
        if KNOWN_UI_FRAMEWORKS.contains(&name.as_str())
            && !ui.iter().any(|u| u.name.trim().eq_ignore_ascii_case(&name))
        {
            ui.push(f);
        }
    }
    if ui.len() < 2 {
        return None;
    }

    let names: Vec<String> = ui.iter().map(|f| f.name.trim().to_ascii_lowercase()).collect();
    let listed: Vec<String> = ui
        .iter()
        .map(|f| match &f.version {
            Some(v) => format!("{} {}", f.name.trim(), v),
            None => f.name.trim().to_string(),
        })
        .collect();
    let primary = ui[0].name.trim();

    let source = DriftSource {
        entity_type: EntityType::Component,
        entity_id: PROJECT_ENTITY.to_string(),
        entity_name: PROJECT_ENTITY.to_string(),
        location: "package.json".to_string(),
    };

    Some(
        DriftSignal::new(
            DriftType::FrameworkSprawl,
            Severity::Warning,
            source,
            format!(
                "{} UI frameworks detected: {}",
                ui.len(),
                listed.join(", ")
            ),
        )
        .qualified(&names.join("+"))
        .with_details(DriftDetails {
            expected: Some(Value::String(primary.to_string())),
            actual: Some(Value::String(names.join(", "))),
            suggestions: Some(vec![format!(
                "Consolidate on {primary} and migrate the remaining components"
            )]),
            ..Default::default()
        }),
    )
}
