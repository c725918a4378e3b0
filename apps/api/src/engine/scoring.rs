//! Feature scoring: weighted match score between a structured query and one
//! catalogue item.
//!
//! Each sub-score is normalized to [0, 1] before weighting. Dimensions the
//! query leaves unspecified are excluded from the sum and the remaining
//! weights renormalized, so an item that perfectly satisfies every specified
//! dimension always scores 100. A query with no dimensions specified scores
//! every item 0, which leaves the catalogue in insertion order downstream.

use crate::catalogue::models::Assessment;
use crate::engine::query::StructuredQuery;

pub const W_TARGET_ROLE: f64 = 0.30;
pub const W_COMPETENCIES: f64 = 0.25;
pub const W_USE_CASE: f64 = 0.20;
pub const W_ASSESSMENT_TYPE: f64 = 0.10;
pub const W_DURATION: f64 = 0.05;
pub const W_DIFFICULTY: f64 = 0.05;
pub const W_LANGUAGE: f64 = 0.05;

/// Weighted match score in [0, 100].
pub fn match_score(query: &StructuredQuery, item: &Assessment) -> f64 {
    let mut score = 0.0;
    let mut max_score = 0.0;

    if let Some(role) = &query.target_role {
        max_score += W_TARGET_ROLE;
        if role_matches(role, &item.target_roles) {
            score += W_TARGET_ROLE;
        }
    }

    if let Some(competencies) = query.competencies.as_deref().filter(|c| !c.is_empty()) {
        max_score += W_COMPETENCIES;
        score += W_COMPETENCIES * competency_overlap(competencies, &item.competencies);
    }

    if let Some(use_case) = &query.use_case {
        max_score += W_USE_CASE;
        if contains_ignore_case(&item.use_cases, use_case) {
            score += W_USE_CASE;
        }
    }

    if let Some(kind) = query.assessment_type {
        max_score += W_ASSESSMENT_TYPE;
        if item.kind == kind {
            score += W_ASSESSMENT_TYPE;
        }
    }

    if let Some(max_duration) = query.max_duration_minutes {
        max_score += W_DURATION;
        if item.duration_minutes <= max_duration {
            score += W_DURATION;
        }
    }

    if let Some(difficulty) = query.difficulty_level {
        max_score += W_DIFFICULTY;
        if item.difficulty_level == difficulty {
            score += W_DIFFICULTY;
        }
    }

    if let Some(language) = &query.language {
        max_score += W_LANGUAGE;
        if contains_ignore_case(&item.languages, language) {
            score += W_LANGUAGE;
        }
    }

    if max_score > 0.0 {
        (score / max_score) * 100.0
    } else {
        0.0
    }
}

/// The sentinel role "all" matches any queried role.
fn role_matches(queried: &str, target_roles: &[String]) -> bool {
    target_roles
        .iter()
        .any(|r| r.eq_ignore_ascii_case("all") || r.eq_ignore_ascii_case(queried))
}

/// |query ∩ item| / |query|, case-insensitive.
fn competency_overlap(queried: &[String], item_competencies: &[String]) -> f64 {
    let overlap = queried
        .iter()
        .filter(|q| contains_ignore_case(item_competencies, q))
        .count();
    overlap as f64 / queried.len() as f64
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|h| h.eq_ignore_ascii_case(needle))
}
