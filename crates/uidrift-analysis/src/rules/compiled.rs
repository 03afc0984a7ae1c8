//! A rule with its patterns compiled.

use glob::{MatchOptions, Pattern};
use regex::Regex;

use uidrift_core::config::RuleMatch;
use uidrift_core::errors::{RuleError, RuleField};
use uidrift_core::models::{DriftSignal, EntityType};

use super::matcher::strip_line_suffix;

/// Each pattern field holds its compiled form or the compile error.
#[derive(Debug)]
pub struct CompiledRule<'r> {
    pub rule: &'r RuleMatch,
    pub index: usize,
    file: Option<Result<Pattern, RuleError>>,
    component: Option<Result<Regex, RuleError>>,
    token: Option<Result<Regex, RuleError>>,
    value: Option<Result<Regex, RuleError>>,
}

fn compile_regex(index: usize, field: RuleField, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| RuleError::InvalidRegex {
        rule_index: index,
        field,
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn compile_glob(index: usize, pattern: &str) -> Result<Pattern, RuleError> {
    Pattern::new(pattern).map_err(|e| RuleError::InvalidGlob {
        rule_index: index,
        field: RuleField::File,
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })
}

/// `*` and `?` stay within one path segment; only `**` crosses `/`.
fn path_match_options() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

impl<'r> CompiledRule<'r> {
    pub fn compile(rule: &'r RuleMatch, index: usize) -> Self {
        Self {
            rule,
            index,
            file: rule.file.as_deref().map(|p| compile_glob(index, p)),
            component: rule
                .component
                .as_deref()
                .map(|p| compile_regex(index, RuleField::Component, p)),
            token: rule
                .token
                .as_deref()
                .map(|p| compile_regex(index, RuleField::Token, p)),
            value: rule
                .value
                .as_deref()
                .map(|p| compile_regex(index, RuleField::Value, p)),
        }
    }

    /// Compile errors, in field order.
    pub fn errors(&self) -> Vec<&RuleError> {
        let mut errors = Vec::new();
        if let Some(Err(e)) = &self.file {
            errors.push(e);
        }
        for field in [&self.component, &self.token, &self.value] {
            if let Some(Err(e)) = field {
                errors.push(e);
            }
        }
        errors
    }

    /// True when the rule has at least one dimension and no compile errors.
    pub fn can_match(&self) -> bool {
        !self.rule.is_empty() && self.errors().is_empty()
    }

    /// Every set dimension must hold.
    pub fn matches(&self, drift: &DriftSignal) -> bool {
        if !self.can_match() {
            return false;
        }
        let rule = self.rule;

        if rule.drift_type.is_some_and(|t| t != drift.drift_type) {
            return false;
        }
        if rule.severity.is_some_and(|s| s != drift.severity) {
            return false;
        }
        if let Some(Ok(glob)) = &self.file {
            if !glob.matches_with(strip_line_suffix(&drift.source.location), path_match_options()) {
                return false;
            }
        }
        if let Some(Ok(re)) = &self.component {
            if drift.source.entity_type != EntityType::Component
                || !re.is_match(&drift.source.entity_name)
            {
                return false;
            }
        }
        if let Some(Ok(re)) = &self.token {
            if drift.source.entity_type != EntityType::Token
                || !re.is_match(&drift.source.entity_name)
            {
                return false;
            }
        }
        if let (Some(Ok(re)), Some(expected)) = (&self.value, rule.value.as_deref()) {
            let Some(actual) = drift.details.actual_str() else {
                return false;
            };
            if actual != expected && !re.is_match(actual) {
                return false;
            }
        }
        true
    }
}
