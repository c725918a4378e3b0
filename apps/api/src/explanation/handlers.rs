use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::engine::handlers::{assemble_query_text, TextRecommendationRequest};
use crate::engine::query::{TextQuery, TEXT_TOP_N_MAX};
use crate::errors::AppError;
use crate::explanation::explain;
use crate::state::AppState;

/// POST /explanations
///
/// Runs text-based recommendation, then asks the provider to explain the
/// ranked list. The call fails atomically: a provider failure fails the
/// whole request and no partial result is returned.
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<TextRecommendationRequest>,
) -> Result<Json<Value>, AppError> {
    let text = assemble_query_text(&state, &request).await?;
    let recommendations = state.engine.recommend_from_text(&TextQuery {
        text: text.clone(),
        top_n: request.top_n.unwrap_or(TEXT_TOP_N_MAX),
    })?;

    let explanation = explain(&text, &recommendations, state.explainer.as_ref()).await?;

    Ok(Json(json!({
        "count": recommendations.len(),
        "recommendations": recommendations,
        "explanation": explanation,
    })))
}
