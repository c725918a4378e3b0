use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalogue::models::{AssessmentType, DifficultyLevel};
use crate::engine::query::{StructuredQuery, TextQuery, DEFAULT_TOP_N, TEXT_TOP_N_MAX};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /recommendations query parameters. List-valued fields arrive
/// comma-separated; the JSON POST body takes proper arrays instead.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub target_role: Option<String>,
    pub competencies: Option<String>,
    pub use_case: Option<String>,
    pub assessment_type: Option<AssessmentType>,
    pub max_duration_minutes: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub language: Option<String>,
    pub exclude_ids: Option<String>,
    pub top_n: Option<usize>,
}

impl RecommendationParams {
    fn into_query(self) -> StructuredQuery {
        StructuredQuery {
            target_role: self.target_role,
            competencies: self.competencies.as_deref().map(split_csv),
            use_case: self.use_case,
            assessment_type: self.assessment_type,
            max_duration_minutes: self.max_duration_minutes,
            difficulty_level: self.difficulty_level,
            language: self.language,
            exclude_ids: self.exclude_ids.as_deref().map(split_csv),
            top_n: self.top_n.unwrap_or(DEFAULT_TOP_N),
        }
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// GET /recommendations
pub async fn handle_recommend_get(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<Value>, AppError> {
    let query = params.into_query();
    let recommendations = state.engine.recommend(&query)?;
    Ok(Json(json!({
        "count": recommendations.len(),
        "recommendations": recommendations,
    })))
}

/// POST /recommendations — echoes the criteria back alongside the results.
pub async fn handle_recommend_post(
    State(state): State<AppState>,
    Json(query): Json<StructuredQuery>,
) -> Result<Json<Value>, AppError> {
    let recommendations = state.engine.recommend(&query)?;
    Ok(Json(json!({
        "count": recommendations.len(),
        "recommendations": recommendations,
        "criteria": query,
    })))
}

/// Request body shared by POST /text_recommendations and POST /explanations.
#[derive(Debug, Deserialize)]
pub struct TextRecommendationRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub jd_url: Option<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Assembles the ranking text from the free-text query and/or a fetched JD
/// page. Errors if neither source yields readable text.
pub async fn assemble_query_text(
    state: &AppState,
    request: &TextRecommendationRequest,
) -> Result<String, AppError> {
    let mut parts = Vec::new();

    if let Some(query) = request.query.as_deref() {
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    if let Some(url) = request.jd_url.as_deref() {
        let fetched = state.fetcher.fetch(url).await?;
        if !fetched.trim().is_empty() {
            parts.push(fetched);
        }
    }

    if parts.is_empty() {
        return Err(AppError::Validation(
            "Provide at least \"query\" or \"jd_url\" with readable text".to_string(),
        ));
    }
    Ok(parts.join("\n\n"))
}

/// POST /text_recommendations
pub async fn handle_text_recommend(
    State(state): State<AppState>,
    Json(request): Json<TextRecommendationRequest>,
) -> Result<Json<Value>, AppError> {
    let text = assemble_query_text(&state, &request).await?;
    let recommendations = state.engine.recommend_from_text(&TextQuery {
        text,
        top_n: request.top_n.unwrap_or(TEXT_TOP_N_MAX),
    })?;
    Ok(Json(json!({
        "count": recommendations.len(),
        "recommendations": recommendations,
    })))
}
