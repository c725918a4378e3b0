use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// What an assessment measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Cognitive,
    Personality,
    Situational,
    Motivation,
    Development,
    Feedback,
}

/// Broad measurement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ability,
    Behavioral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// One catalogue item. Immutable after load.
///
/// `competencies` is ordered: position is display priority.
/// A `target_roles` entry of `"all"` matches any queried role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub category: Category,
    pub duration_minutes: u32,
    pub target_roles: Vec<String>,
    pub competencies: Vec<String>,
    pub use_cases: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    pub languages: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Assessment {
    /// Data-integrity check. A record that fails here indicates a corrupt
    /// catalogue entry and aborts the whole operation rather than being
    /// silently skipped.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() {
            return Err(AppError::MalformedItem("empty id".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::MalformedItem(format!("{}: empty name", self.id)));
        }
        if self.duration_minutes == 0 {
            return Err(AppError::MalformedItem(format!(
                "{}: duration_minutes must be positive",
                self.id
            )));
        }
        Ok(())
    }

    /// All descriptive text of the item, joined. Feeds both the token index
    /// and the text-similarity ranker.
    pub fn combined_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.name, &self.description];
        parts.extend(self.competencies.iter().map(String::as_str));
        parts.extend(self.use_cases.iter().map(String::as_str));
        parts.join(" ")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Shared fixture for tests across the crate.
    pub(crate) fn sample_assessment(id: &str) -> Assessment {
        Assessment {
            id: id.to_string(),
            name: format!("Assessment {id}"),
            kind: AssessmentType::Personality,
            category: Category::Behavioral,
            duration_minutes: 30,
            target_roles: vec!["manager".to_string()],
            competencies: vec!["leadership".to_string()],
            use_cases: vec!["hiring".to_string()],
            difficulty_level: DifficultyLevel::Intermediate,
            languages: vec!["en".to_string()],
            description: "A sample assessment".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_assessment_type_serde_lowercase() {
        let kind: AssessmentType = serde_json::from_str(r#""cognitive""#).unwrap();
        assert_eq!(kind, AssessmentType::Cognitive);
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""cognitive""#);
    }

    #[test]
    fn test_assessment_deserializes_from_catalogue_json() {
        let json = r#"{
            "id": "OPQ32",
            "name": "Occupational Personality Questionnaire",
            "type": "personality",
            "category": "behavioral",
            "duration_minutes": 45,
            "target_roles": ["manager", "sales"],
            "competencies": ["leadership", "communication"],
            "use_cases": ["hiring", "development"],
            "difficulty_level": "intermediate",
            "languages": ["en", "es"],
            "description": "Measures workplace behavioural style."
        }"#;
        let a: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "OPQ32");
        assert_eq!(a.kind, AssessmentType::Personality);
        assert_eq!(a.url, None);
        a.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut a = sample_assessment("A1");
        a.id = "  ".to_string();
        assert!(matches!(a.validate(), Err(AppError::MalformedItem(_))));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut a = sample_assessment("A1");
        a.duration_minutes = 0;
        assert!(matches!(a.validate(), Err(AppError::MalformedItem(_))));
    }

    #[test]
    fn test_combined_text_includes_competencies_and_use_cases() {
        let a = sample_assessment("A1");
        let text = a.combined_text();
        assert!(text.contains("leadership"));
        assert!(text.contains("hiring"));
        assert!(text.contains("Assessment A1"));
    }
}
