//! Pillar health score: value discipline (60), token health (20),
//! consistency (10), critical issues (10).
//!
//! Each pillar is a pure function of [`HealthMetrics`]; every division by a
//! count is guarded with `max(count, 1)`.

use std::time::Instant;

use uidrift_core::tracing::metrics::HEALTH_SCORE_TIME;

use super::suggestions::generate_suggestions;
use super::types::{HealthMetrics, HealthScorePillarResult, HealthTier, PillarScore};

pub const VALUE_DISCIPLINE_MAX: u32 = 60;
pub const TOKEN_HEALTH_MAX: u32 = 20;
pub const CONSISTENCY_MAX: u32 = 10;
pub const CRITICAL_ISSUES_MAX: u32 = 10;

/// Density at which value discipline reaches zero.
const DENSITY_FLOOR: f64 = 2.0;
/// Scale applied to dead-code density before it is added.
const DEAD_CODE_WEIGHT: f64 = 0.3;
/// Weight of repeated patterns within dead-code density.
const REPEATED_PATTERN_WEIGHT: f64 = 0.5;
/// Share of total drift density that competes with hardcoded density.
const DRIFT_DENSITY_WEIGHT: f64 = 0.5;

/// Points for each token-health sub-factor.
const TOKEN_FACTOR_POINTS: f64 = 5.0;
/// Token count that earns full coverage credit.
const FULL_COVERAGE_TOKENS: f64 = 20.0;

/// Naming rate at which consistency reaches zero.
const NAMING_RATE_FLOOR: f64 = 0.25;

/// Points lost per effective critical issue.
const CRITICAL_PENALTY: u32 = 3;

fn per_component(count: f64, m: &HealthMetrics) -> f64 {
    count / m.component_count.max(1) as f64
}

/// Effective density feeding value discipline.
pub fn value_discipline_density(m: &HealthMetrics) -> f64 {
    let hardcoded = per_component(m.hardcoded_value_count as f64, m);
    let dead_code = per_component(
        m.unused_component_count as f64
            + m.orphaned_component_count as f64
            + REPEATED_PATTERN_WEIGHT * m.repeated_pattern_count as f64,
        m,
    );
    let drift = per_component(m.total_drift_count as f64, m) * DRIFT_DENSITY_WEIGHT;
    (hardcoded + dead_code * DEAD_CODE_WEIGHT).max(drift)
}

/// `round(60 * clamp(1 - density / 2))`.
pub fn value_discipline_score(m: &HealthMetrics) -> u32 {
    let density = value_discipline_density(m);
    let factor = (1.0 - density / DENSITY_FLOOR).clamp(0.0, 1.0);
    (VALUE_DISCIPLINE_MAX as f64 * factor).round() as u32
}

/// Four five-point sub-factors, capped at 20. Usage credit is rounded on
/// its own before the sum is rounded.
pub fn token_health_score(m: &HealthMetrics) -> u32 {
    let utility = if m.utility_framework.is_some() {
        TOKEN_FACTOR_POINTS
    } else {
        0.0
    };
    let library = if m.design_system_library.is_some() {
        TOKEN_FACTOR_POINTS
    } else {
        0.0
    };
    let coverage = (m.token_count as f64 / FULL_COVERAGE_TOKENS).min(1.0) * TOKEN_FACTOR_POINTS;

    let usage = if m.token_count > 0 {
        let used = m.token_count.saturating_sub(m.unused_token_count) as f64;
        (TOKEN_FACTOR_POINTS * used / m.token_count as f64).round()
    } else if m.utility_framework.is_some() {
        // Implied system: the utility framework stands in for tokens.
        let density = per_component(m.hardcoded_value_count as f64, m);
        if density < 0.1 {
            3.0
        } else if density < 0.5 {
            5.0
        } else if density < 1.0 {
            3.0
        } else {
            0.0
        }
    } else {
        0.0
    };

    ((utility + library + coverage + usage).round() as u32).min(TOKEN_HEALTH_MAX)
}

/// `round(10 * clamp(1 - rate / 0.25))` over naming and semantic mismatches.
pub fn consistency_score(m: &HealthMetrics) -> u32 {
    let rate = per_component(
        (m.naming_inconsistency_count + m.semantic_mismatch_count) as f64,
        m,
    );
    let factor = (1.0 - rate / NAMING_RATE_FLOOR).clamp(0.0, 1.0);
    (CONSISTENCY_MAX as f64 * factor).round() as u32
}

/// `max(0, 10 - 3 * (critical + ceil(deprecated / 2)))`.
pub fn critical_issues_score(m: &HealthMetrics) -> u32 {
    let effective = m.critical_count + m.deprecated_pattern_count.div_ceil(2);
    let penalty = u32::try_from(effective)
        .unwrap_or(u32::MAX)
        .saturating_mul(CRITICAL_PENALTY);
    CRITICAL_ISSUES_MAX.saturating_sub(penalty)
}

pub fn get_health_tier(score: u32) -> HealthTier {
    match score {
        80.. => HealthTier::Great,
        60..=79 => HealthTier::Good,
        40..=59 => HealthTier::Ok,
        20..=39 => HealthTier::Bad,
        _ => HealthTier::Terrible,
    }
}

/// Score a project 0-100 from its aggregate metrics.
pub fn calculate_health_score_pillar(metrics: &HealthMetrics) -> HealthScorePillarResult {
    let start = Instant::now();

    let value_discipline = value_discipline_score(metrics);
    let token_health = token_health_score(metrics);
    let consistency = consistency_score(metrics);
    let critical_issues = critical_issues_score(metrics);
    let score = value_discipline + token_health + consistency + critical_issues;
    let tier = get_health_tier(score);

    tracing::debug!(
        score,
        value_discipline,
        token_health,
        consistency,
        critical_issues,
        tier = %tier,
        { HEALTH_SCORE_TIME } = start.elapsed().as_micros() as u64,
        "health score computed"
    );

    HealthScorePillarResult {
        score,
        value_discipline: PillarScore {
            score: value_discipline,
            max: VALUE_DISCIPLINE_MAX,
        },
        token_health: PillarScore {
            score: token_health,
            max: TOKEN_HEALTH_MAX,
        },
        consistency: PillarScore {
            score: consistency,
            max: CONSISTENCY_MAX,
        },
        critical_issues: PillarScore {
            score: critical_issues,
            max: CRITICAL_ISSUES_MAX,
        },
        tier,
        suggestions: generate_suggestions(metrics, score),
    }
}
