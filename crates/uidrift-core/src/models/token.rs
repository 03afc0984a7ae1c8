//! Design tokens: named design values from token files or design tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::create_token_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Shadow,
    Border,
    Radius,
    Other,
}

/// A token's resolved value. Tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TokenValue {
    Color {
        hex: String,
    },
    Spacing {
        value: f64,
        unit: String,
    },
    Typography {
        font_family: String,
        font_size: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_weight: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_height: Option<f64>,
    },
    Raw {
        value: String,
    },
}

impl TokenValue {
    /// Value equality after normalisation.
    ///
    /// Colours compare case-insensitively with shorthand hex expanded;
    /// different variants never match.
    pub fn matches(&self, other: &TokenValue) -> bool {
        match (self, other) {
            (Self::Color { hex: a }, Self::Color { hex: b }) => {
                match (normalize_hex(a), normalize_hex(b)) {
                    (Some(a), Some(b)) => a == b,
                    _ => a.trim().eq_ignore_ascii_case(b.trim()),
                }
            }
            (
                Self::Spacing { value: va, unit: ua },
                Self::Spacing { value: vb, unit: ub },
            ) => (va - vb).abs() < f64::EPSILON && ua.trim().eq_ignore_ascii_case(ub.trim()),
            (
                Self::Typography {
                    font_family: fa,
                    font_size: sa,
                    font_weight: wa,
                    line_height: la,
                },
                Self::Typography {
                    font_family: fb,
                    font_size: sb,
                    font_weight: wb,
                    line_height: lb,
                },
            ) => fa.trim() == fb.trim() && sa == sb && wa == wb && la == lb,
            (Self::Raw { value: a }, Self::Raw { value: b }) => a.trim() == b.trim(),
            _ => false,
        }
    }

    /// Render the value as a single string for messages and drift details.
    pub fn display(&self) -> String {
        match self {
            Self::Color { hex } => hex.clone(),
            Self::Spacing { value, unit } => format!("{value}{unit}"),
            Self::Typography {
                font_family,
                font_size,
                font_weight,
                line_height,
            } => {
                let mut out = format!("{font_size}px {font_family}");
                if let Some(w) = font_weight {
                    out.push_str(&format!(" {w}"));
                }
                if let Some(lh) = line_height {
                    out.push_str(&format!(" / {lh}"));
                }
                out
            }
            Self::Raw { value } => value.clone(),
        }
    }
}

/// Normalise a hex colour to lowercase `#rrggbb` / `#rrggbbaa`.
///
/// Returns `None` when the input is not a 3, 4, 6 or 8 digit hex colour.
pub fn normalize_hex(input: &str) -> Option<String> {
    let digits = input.trim().trim_start_matches('#').to_ascii_lowercase();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 | 4 => Some(format!(
            "#{}",
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        )),
        6 | 8 => Some(format!("#{digits}")),
        _ => None,
    }
}

/// Where a token was defined. Tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TokenSource {
    Json {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    Css {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    Scss {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variable_name: Option<String>,
    },
    Tailwind {
        path: String,
    },
    Figma {
        file_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style_id: Option<String>,
    },
}

impl TokenSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json { .. } => "json",
            Self::Css { .. } => "css",
            Self::Scss { .. } => "scss",
            Self::Tailwind { .. } => "tailwind",
            Self::Figma { .. } => "figma",
        }
    }

    pub fn locator(&self) -> String {
        match self {
            Self::Json { path, .. }
            | Self::Css { path, .. }
            | Self::Scss { path, .. }
            | Self::Tailwind { path } => path.clone(),
            Self::Figma { file_key, .. } => file_key.clone(),
        }
    }

    pub fn location(&self) -> String {
        match self {
            Self::Css {
                path,
                line: Some(line),
            } => format!("{path}:{line}"),
            Self::Figma { .. } => format!("figma:{}", self.locator()),
            _ => self.locator(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub deprecated: bool,
}

/// A named design value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignToken {
    pub id: String,
    pub name: String,
    pub category: TokenCategory,
    pub value: TokenValue,
    pub source: TokenSource,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Ids of components using this token.
    #[serde(default)]
    pub used_by: Vec<String>,
    #[serde(default)]
    pub metadata: TokenMetadata,
    pub scanned_at: DateTime<Utc>,
}

impl DesignToken {
    /// Create a token with an id derived from its source and name.
    pub fn new(
        name: impl Into<String>,
        category: TokenCategory,
        value: TokenValue,
        source: TokenSource,
        scanned_at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        Self {
            id: create_token_id(&source, &name),
            name,
            category,
            value,
            source,
            aliases: Vec::new(),
            used_by: Vec::new(),
            metadata: TokenMetadata::default(),
            scanned_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_shorthand_expands() {
        assert_eq!(normalize_hex("#FFF").as_deref(), Some("#ffffff"));
        assert_eq!(normalize_hex("3b82f6").as_deref(), Some("#3b82f6"));
        assert_eq!(normalize_hex("#12345"), None);
        assert_eq!(normalize_hex("red"), None);
    }

    #[test]
    fn color_values_match_case_insensitively() {
        let a = TokenValue::Color { hex: "#FFF".into() };
        let b = TokenValue::Color { hex: "#ffffff".into() };
        assert!(a.matches(&b));
        assert!(!a.matches(&TokenValue::Raw { value: "#fff".into() }));
    }

    #[test]
    fn spacing_requires_same_unit() {
        let px = TokenValue::Spacing { value: 16.0, unit: "px".into() };
        let rem = TokenValue::Spacing { value: 16.0, unit: "rem".into() };
        assert!(!px.matches(&rem));
        assert_eq!(px.display(), "16px");
    }
}
