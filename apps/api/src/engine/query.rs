use serde::{Deserialize, Serialize};

use crate::catalogue::models::{Assessment, AssessmentType, Category, DifficultyLevel};

/// Default result count for structured recommendations.
pub const DEFAULT_TOP_N: usize = 5;
/// Text-based recommendations always return between 5 and 10 results;
/// requested counts outside the window are clamped, not rejected.
pub const TEXT_TOP_N_MIN: usize = 5;
pub const TEXT_TOP_N_MAX: usize = 10;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// Structured recommendation criteria. Every field is independently
/// optional; an absent field means "do not filter or score on this
/// dimension".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredQuery {
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub competencies: Option<Vec<String>>,
    #[serde(default)]
    pub use_case: Option<String>,
    #[serde(default)]
    pub assessment_type: Option<AssessmentType>,
    #[serde(default)]
    pub max_duration_minutes: Option<u32>,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, skip_serializing)]
    pub exclude_ids: Option<Vec<String>>,
    #[serde(default = "default_top_n", skip_serializing)]
    pub top_n: usize,
}

impl Default for StructuredQuery {
    fn default() -> Self {
        Self {
            target_role: None,
            competencies: None,
            use_case: None,
            assessment_type: None,
            max_duration_minutes: None,
            difficulty_level: None,
            language: None,
            exclude_ids: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Free-text query: a natural-language ask and/or fetched JD content.
#[derive(Debug, Clone)]
pub struct TextQuery {
    pub text: String,
    pub top_n: usize,
}

impl TextQuery {
    /// Requested count clamped into the [5, 10] window.
    pub fn clamped_top_n(&self) -> usize {
        self.top_n.clamp(TEXT_TOP_N_MIN, TEXT_TOP_N_MAX)
    }
}

/// One entry of a ranked recommendation list. Carries denormalized display
/// fields plus exactly one of `match_score` (structured path, 0–100) or
/// `similarity` (text path, 0–1).
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub category: Category,
    pub duration_minutes: u32,
    pub difficulty_level: DifficultyLevel,
    pub competencies: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl RankedResult {
    fn display_fields(item: &Assessment) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            category: item.category,
            duration_minutes: item.duration_minutes,
            difficulty_level: item.difficulty_level,
            competencies: item.competencies.clone(),
            description: item.description.clone(),
            url: item.url.clone(),
            match_score: None,
            similarity: None,
        }
    }

    pub fn from_match(item: &Assessment, score: f64) -> Self {
        Self {
            match_score: Some((score * 100.0).round() / 100.0),
            ..Self::display_fields(item)
        }
    }

    pub fn from_similarity(item: &Assessment, similarity: f64) -> Self {
        Self {
            similarity: Some(similarity),
            ..Self::display_fields(item)
        }
    }

    /// The ordering key regardless of which path produced the result.
    pub fn score(&self) -> f64 {
        self.match_score.or(self.similarity).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::models::tests::sample_assessment;

    #[test]
    fn test_structured_query_default_top_n() {
        let q: StructuredQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.top_n, 5);
        assert!(q.target_role.is_none());
    }

    #[test]
    fn test_structured_query_deserializes_all_fields() {
        let q: StructuredQuery = serde_json::from_str(
            r#"{
                "target_role": "manager",
                "competencies": ["leadership"],
                "use_case": "hiring",
                "assessment_type": "personality",
                "max_duration_minutes": 40,
                "difficulty_level": "beginner",
                "language": "en",
                "exclude_ids": ["X1"],
                "top_n": 3
            }"#,
        )
        .unwrap();
        assert_eq!(q.top_n, 3);
        assert_eq!(q.assessment_type, Some(AssessmentType::Personality));
        assert_eq!(q.exclude_ids.as_deref(), Some(["X1".to_string()].as_slice()));
    }

    #[test]
    fn test_text_query_clamps_low_and_high() {
        let low = TextQuery {
            text: "x".to_string(),
            top_n: 2,
        };
        let high = TextQuery {
            text: "x".to_string(),
            top_n: 50,
        };
        assert_eq!(low.clamped_top_n(), 5);
        assert_eq!(high.clamped_top_n(), 10);
    }

    #[test]
    fn test_text_query_in_window_unchanged() {
        let q = TextQuery {
            text: "x".to_string(),
            top_n: 7,
        };
        assert_eq!(q.clamped_top_n(), 7);
    }

    #[test]
    fn test_ranked_result_rounds_match_score() {
        let r = RankedResult::from_match(&sample_assessment("A1"), 66.66666);
        assert_eq!(r.match_score, Some(66.67));
        assert!(r.similarity.is_none());
    }

    #[test]
    fn test_ranked_result_score_key() {
        let item = sample_assessment("A1");
        assert_eq!(RankedResult::from_match(&item, 80.0).score(), 80.0);
        assert_eq!(RankedResult::from_similarity(&item, 0.5).score(), 0.5);
    }
}
