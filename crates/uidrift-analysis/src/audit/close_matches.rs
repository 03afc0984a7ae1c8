//! Near-miss detection: found literals that almost equal an existing token.
//!
//! Colour closeness is edit distance on the normalized hex string, not a
//! perceptual distance.

use uidrift_core::models::{normalize_hex, DesignToken, TokenSuggestion, TokenValue};

use super::types::CloseMatch;
use crate::diff::similarity::levenshtein_distance;

/// Largest hex edit distance still considered a near miss.
pub const MAX_COLOR_DISTANCE: usize = 2;

/// Largest pixel delta still considered a near miss.
pub const MAX_SPACING_DELTA_PX: f64 = 1.0;

/// Root font size used to convert `rem`/`em` to pixels.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Confidence attached to a token suggestion that exactly equals the value.
pub const EXACT_SUGGESTION_CONFIDENCE: f64 = 1.0;

/// Confidence attached to a near-miss token suggestion.
pub const CLOSE_SUGGESTION_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseMatchKind {
    Color,
    Spacing,
}

/// Parse `12px`, `0.75rem`, `1em` or a bare number into pixels.
pub fn parse_px(value: &str) -> Option<f64> {
    let v = value.trim().to_ascii_lowercase();
    let (number, scale) = if let Some(n) = v.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = v.strip_suffix("em") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = v.strip_suffix("px") {
        (n, 1.0)
    } else {
        (v.as_str(), 1.0)
    };
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n * scale)
}

fn token_hex(token: &DesignToken) -> Option<String> {
    match &token.value {
        TokenValue::Color { hex } => normalize_hex(hex),
        TokenValue::Raw { value } => normalize_hex(value),
        _ => None,
    }
}

fn token_px(token: &DesignToken) -> Option<f64> {
    match &token.value {
        TokenValue::Spacing { value, unit } => parse_px(&format!("{value}{unit}")),
        TokenValue::Raw { value } => parse_px(value),
        _ => None,
    }
}

/// Distance between a found value and a token, `None` when incomparable.
fn distance(found: &str, token: &DesignToken, kind: CloseMatchKind) -> Option<f64> {
    match kind {
        CloseMatchKind::Color => {
            let found = normalize_hex(found)?;
            let known = token_hex(token)?;
            Some(levenshtein_distance(&found, &known) as f64)
        }
        CloseMatchKind::Spacing => {
            let found = parse_px(found)?;
            let known = token_px(token)?;
            Some((found - known).abs())
        }
    }
}

fn within_threshold(d: f64, kind: CloseMatchKind) -> bool {
    match kind {
        CloseMatchKind::Color => d <= MAX_COLOR_DISTANCE as f64,
        CloseMatchKind::Spacing => d <= MAX_SPACING_DELTA_PX + f64::EPSILON,
    }
}

/// For every found value that is near, but not equal to, a known token,
/// report the closest such token. Values exactly equal to some token are
/// skipped entirely.
pub fn find_close_matches<S: AsRef<str>>(
    found_values: &[S],
    known_tokens: &[DesignToken],
    kind: CloseMatchKind,
) -> Vec<CloseMatch> {
    let mut matches = Vec::new();

    for found in found_values {
        let found = found.as_ref();
        let distances: Vec<(&DesignToken, f64)> = known_tokens
            .iter()
            .filter_map(|t| distance(found, t, kind).map(|d| (t, d)))
            .collect();

        if distances.iter().any(|(_, d)| *d == 0.0) {
            continue;
        }

        let closest = distances
            .into_iter()
            .filter(|(_, d)| within_threshold(*d, kind))
            .fold(None::<(&DesignToken, f64)>, |best, (t, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((t, d)),
            });

        if let Some((token, d)) = closest {
            matches.push(CloseMatch {
                value: found.to_string(),
                token_id: token.id.clone(),
                token_name: token.name.clone(),
                token_value: token.value.display(),
                distance: d,
            });
        }
    }

    matches
}

/// Best token to replace `value`: an exact match, else the closest near miss.
pub fn suggest_token(
    value: &str,
    tokens: &[DesignToken],
    kind: CloseMatchKind,
) -> Option<TokenSuggestion> {
    let mut best: Option<(&DesignToken, f64)> = None;
    for token in tokens {
        let Some(d) = distance(value, token, kind) else {
            continue;
        };
        if !within_threshold(d, kind) {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((token, d));
        }
    }

    best.map(|(token, d)| TokenSuggestion {
        hardcoded_value: value.to_string(),
        token_id: token.id.clone(),
        token_name: token.name.clone(),
        token_value: token.value.display(),
        confidence: if d == 0.0 {
            EXACT_SUGGESTION_CONFIDENCE
        } else {
            CLOSE_SUGGESTION_CONFIDENCE
        },
    })
}
