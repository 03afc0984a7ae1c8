//! Tier- and framework-aware remediation suggestions.

use super::types::HealthMetrics;

/// User-facing hardcoded density at or above which advice is framework specific.
pub const SEVERE_DENSITY: f64 = 1.5;
/// Density at or above which the worst file is called out.
pub const MODERATE_DENSITY: f64 = 0.5;
/// Unique spacing values above which consolidation is suggested.
pub const SPACING_CONSOLIDATION_THRESHOLD: usize = 20;
/// Scores at or above this get a single aspirational suggestion.
pub const ASPIRATIONAL_SCORE: u32 = 90;

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn mentions(value: &Option<String>, needle: &str) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.to_ascii_lowercase().contains(needle))
}

/// Suggestions for a project with the given metrics and total score.
///
/// A perfect score yields one congratulation; a score of 90 or more yields
/// one "reach 100" nudge; anything lower gets the itemized list.
pub fn generate_suggestions(m: &HealthMetrics, score: u32) -> Vec<String> {
    if score >= 100 {
        return vec!["Perfect score. Your UI is fully aligned with its design system.".to_string()];
    }
    if score >= ASPIRATIONAL_SCORE {
        return vec![format!(
            "You're at {score}/100. Resolve the remaining {} to reach 100.",
            plural(m.total_drift_count, "drift signal", "drift signals")
        )];
    }

    let mut suggestions = Vec::new();
    let hardcoded = m.hardcoded_value_count.saturating_sub(m.vendored_drift_count);
    let density = hardcoded as f64 / m.component_count.max(1) as f64;
    let values = plural(hardcoded, "hardcoded value", "hardcoded values");

    if density >= SEVERE_DENSITY {
        // Tailwind, then MUI, then shadcn/ui.
        let advice = if mentions(&m.utility_framework, "tailwind") {
            format!("Extend your tailwind theme config with the colors and spacing behind {values}, then use the theme classes")
        } else if mentions(&m.design_system_library, "mui")
            || mentions(&m.design_system_library, "material")
        {
            format!("Move the colors behind {values} into theme.palette and reference them through the MUI theme")
        } else if m.shadcn_detected {
            format!("Replace {values} with your shadcn/ui theme variables and compose classes with the cn() utility")
        } else {
            format!("Add a design token file and replace {values} with token references")
        };
        suggestions.push(advice);
    } else if density >= MODERATE_DENSITY {
        let mut advice = format!("Replace {values} with design tokens");
        if let Some(worst) = &m.worst_file {
            advice.push_str(&format!(
                ", starting with {} ({})",
                worst.path,
                plural(worst.issue_count, "issue", "issues")
            ));
        }
        suggestions.push(advice);
    } else if density > 0.0 {
        let mut advice = format!("Nearly there: only {values} left to tokenize");
        if let Some(worst) = m.worst_file.as_ref().filter(|w| w.issue_count > 1) {
            advice.push_str(&format!(
                ", most of them in {} ({} issues)",
                worst.path, worst.issue_count
            ));
        }
        suggestions.push(advice);
    }

    if m.unused_token_count > 0 {
        suggestions.push(format!(
            "Remove or adopt {}",
            plural(m.unused_token_count, "unused token", "unused tokens")
        ));
    }
    if m.token_count == 0 && hardcoded > 0 {
        suggestions.push(
            "Add a token system (CSS variables, a tokens.json, or a theme config) so values have a single source"
                .to_string(),
        );
    }
    if m.unique_spacing_values > SPACING_CONSOLIDATION_THRESHOLD {
        suggestions.push(format!(
            "Consolidate {} unique spacing values into a spacing scale",
            m.unique_spacing_values
        ));
    }
    if m.unused_component_count > 0 {
        suggestions.push(format!(
            "Delete {}",
            plural(m.unused_component_count, "unused component", "unused components")
        ));
    }
    if m.repeated_pattern_count > 0 {
        suggestions.push(format!(
            "Extract {} into shared components",
            plural(m.repeated_pattern_count, "repeated pattern", "repeated patterns")
        ));
    }
    if m.deprecated_pattern_count > 0 {
        suggestions.push(format!(
            "Migrate away from {}",
            plural(m.deprecated_pattern_count, "deprecated pattern", "deprecated patterns")
        ));
    }

    suggestions
}
