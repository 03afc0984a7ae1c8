//! Single-rule predicate.

use std::sync::OnceLock;

use regex::Regex;

use uidrift_core::config::RuleMatch;
use uidrift_core::models::DriftSignal;

use super::compiled::CompiledRule;
use super::engine::WarningSink;

fn line_suffix() -> Option<&'static Regex> {
    static SUFFIX: OnceLock<Option<Regex>> = OnceLock::new();
    SUFFIX.get_or_init(|| Regex::new(r"(:\d+)+$").ok()).as_ref()
}

/// `src/Button.tsx:12:4` -> `src/Button.tsx`.
pub fn strip_line_suffix(location: &str) -> &str {
    match line_suffix().and_then(|re| re.find(location)) {
        Some(m) => &location[..m.start()],
        None => location,
    }
}

/// Whether `drift` satisfies every dimension set on `rule`.
///
/// Compiles the rule's patterns for this one call; to evaluate many drifts
/// use [`CompiledRule`] directly. A rule with an invalid pattern never
/// matches, and each compile error is logged and handed to `on_warning`.
pub fn rule_matches(
    drift: &DriftSignal,
    rule: &RuleMatch,
    mut on_warning: WarningSink<'_, '_>,
) -> bool {
    let compiled = CompiledRule::compile(rule, 0);
    for error in compiled.errors() {
        tracing::warn!(
            field = %error.field(),
            error = %error,
            "drift rule pattern failed to compile"
        );
        if let Some(callback) = on_warning.as_deref_mut() {
            callback(error);
        }
    }
    compiled.matches(drift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_and_column() {
        assert_eq!(strip_line_suffix("src/Button.tsx:12"), "src/Button.tsx");
        assert_eq!(strip_line_suffix("src/Button.tsx:12:4"), "src/Button.tsx");
        assert_eq!(strip_line_suffix("src/Button.tsx"), "src/Button.tsx");
        assert_eq!(strip_line_suffix("figma:abc/1:2"), "figma:abc/1");
    }
}
