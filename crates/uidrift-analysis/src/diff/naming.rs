//! Naming-pattern classification and case conversion.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPattern {
    PascalCase,
    CamelCase,
    KebabCase,
    SnakeCase,
    Other,
}

impl NamingPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
            Self::SnakeCase => "snake_case",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn pattern_regexes() -> &'static [(NamingPattern, Regex)] {
    static PATTERNS: OnceLock<Vec<(NamingPattern, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (NamingPattern::PascalCase, r"^[A-Z][a-zA-Z0-9]*$"),
            (NamingPattern::CamelCase, r"^[a-z][a-zA-Z0-9]*$"),
            (NamingPattern::KebabCase, r"^[a-z][a-z0-9]*(-[a-z0-9]+)+$"),
            (NamingPattern::SnakeCase, r"^[a-z][a-z0-9]*(_[a-z0-9]+)+$"),
        ]
        .into_iter()
        .filter_map(|(p, re)| Regex::new(re).ok().map(|re| (p, re)))
        .collect()
    })
}

/// Classify a name. Single lowercase words count as camelCase.
pub fn classify_name(name: &str) -> NamingPattern {
    pattern_regexes()
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map(|(p, _)| *p)
        .unwrap_or(NamingPattern::Other)
}

/// Split an identifier into lowercase words on separators and case humps.
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = name.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "HTMLInput" splits before the last capital of an acronym.
            if prev_lower || next_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Re-case `name` into `pattern`. `Other` returns the name unchanged.
pub fn convert_to_pattern(name: &str, pattern: NamingPattern) -> String {
    let words = split_words(name);
    match pattern {
        NamingPattern::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
        NamingPattern::CamelCase => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
            .collect(),
        NamingPattern::KebabCase => words.join("-"),
        NamingPattern::SnakeCase => words.join("_"),
        NamingPattern::Other => name.to_string(),
    }
}

/// Rename an event-handler prop to use `prefix` (`"on"` or `"handle"`).
pub fn rename_handler(prop: &str, prefix: &str) -> String {
    let strip = |prefix: &str| {
        prop.get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| &prop[prefix.len()..])
    };
    let rest = strip("handle").or_else(|| strip("on")).unwrap_or(prop);
    format!("{prefix}{}", capitalize(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_patterns() {
        assert_eq!(classify_name("PrimaryButton"), NamingPattern::PascalCase);
        assert_eq!(classify_name("primaryButton"), NamingPattern::CamelCase);
        assert_eq!(classify_name("primary-button"), NamingPattern::KebabCase);
        assert_eq!(classify_name("primary_button"), NamingPattern::SnakeCase);
        assert_eq!(classify_name("Primary_Button"), NamingPattern::Other);
    }

    #[test]
    fn converts_between_patterns() {
        assert_eq!(convert_to_pattern("primary-button", NamingPattern::PascalCase), "PrimaryButton");
        assert_eq!(convert_to_pattern("HTMLInput", NamingPattern::KebabCase), "html-input");
        assert_eq!(convert_to_pattern("card_header", NamingPattern::CamelCase), "cardHeader");
    }

    #[test]
    fn renames_handlers() {
        assert_eq!(rename_handler("handleClick", "on"), "onClick");
        assert_eq!(rename_handler("onPress", "handle"), "handlePress");
        assert_eq!(rename_handler("clickHandler", "on"), "onClickHandler");
    }
}
