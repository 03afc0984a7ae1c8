//! Ignore, promote and enforce over a drift list.

use uidrift_core::config::{HasRuleMatch, PromoteRule};
use uidrift_core::errors::RuleError;
use uidrift_core::models::{DriftSignal, Severity};

use super::compiled::CompiledRule;

/// Optional callback receiving each rule compile error.
pub type WarningSink<'a, 'f> = Option<&'a mut (dyn FnMut(&RuleError) + 'f)>;

/// Compile every rule once, reporting compile errors.
pub(crate) fn compile_rules<'r, R: HasRuleMatch>(
    rules: &'r [R],
    kind: &'static str,
    on_warning: &mut WarningSink<'_, '_>,
) -> Vec<CompiledRule<'r>> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            let compiled = CompiledRule::compile(rule.rule_match(), index);
            for error in compiled.errors() {
                tracing::warn!(
                    rule_kind = kind,
                    rule_index = index,
                    field = %error.field(),
                    error = %error,
                    "drift rule pattern failed to compile; rule will not match"
                );
                if let Some(callback) = on_warning.as_deref_mut() {
                    callback(error);
                }
            }
            compiled
        })
        .collect()
}

/// Drop every drift matched in full by any rule.
///
/// Rules that cannot match (no dimension, or an invalid pattern) remove
/// nothing.
pub fn apply_ignore_rules<R: HasRuleMatch>(
    drifts: Vec<DriftSignal>,
    rules: &[R],
    mut on_warning: WarningSink<'_, '_>,
) -> Vec<DriftSignal> {
    if rules.is_empty() {
        return drifts;
    }
    let compiled = compile_rules(rules, "ignore", &mut on_warning);
    let before = drifts.len();
    let kept: Vec<DriftSignal> = drifts
        .into_iter()
        .filter(|d| !compiled.iter().any(|r| r.matches(d)))
        .collect();
    tracing::debug!(
        ignored = before - kept.len(),
        kept = kept.len(),
        rules = rules.len(),
        "ignore rules applied"
    );
    kept
}

/// Re-grade each drift to the `to` severity of the first matching rule.
pub fn apply_promote_rules(
    drifts: Vec<DriftSignal>,
    rules: &[PromoteRule],
    mut on_warning: WarningSink<'_, '_>,
) -> Vec<DriftSignal> {
    if rules.is_empty() {
        return drifts;
    }
    let compiled = compile_rules(rules, "promote", &mut on_warning);
    let mut promoted = 0usize;
    let drifts = drifts
        .into_iter()
        .map(|mut d| {
            if let Some(rule) = compiled.iter().find(|r| r.matches(&d)) {
                d.severity = rules[rule.index].to;
                promoted += 1;
            }
            d
        })
        .collect();
    tracing::debug!(promoted, rules = rules.len(), "promote rules applied");
    drifts
}

/// Force every drift matched by any rule to critical.
pub fn apply_enforce_rules<R: HasRuleMatch>(
    drifts: Vec<DriftSignal>,
    rules: &[R],
    mut on_warning: WarningSink<'_, '_>,
) -> Vec<DriftSignal> {
    if rules.is_empty() {
        return drifts;
    }
    let compiled = compile_rules(rules, "enforce", &mut on_warning);
    let mut enforced = 0usize;
    let drifts = drifts
        .into_iter()
        .map(|mut d| {
            if compiled.iter().any(|r| r.matches(&d)) {
                d.severity = Severity::Critical;
                enforced += 1;
            }
            d
        })
        .collect();
    tracing::debug!(enforced, rules = rules.len(), "enforce rules applied");
    drifts
}
