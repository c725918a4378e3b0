use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalogue::models::Assessment;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /assessments
pub async fn handle_list(State(state): State<AppState>) -> Json<Value> {
    let assessments = state.engine.list_all();
    Json(json!({
        "count": assessments.len(),
        "assessments": assessments,
    }))
}

/// GET /assessments/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Assessment>, AppError> {
    Ok(Json(state.engine.get_by_id(&id)?.clone()))
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /assessments/search?q=term
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    if params.q.trim().is_empty() {
        return Err(AppError::Validation(
            "Query parameter \"q\" is required".to_string(),
        ));
    }
    let results = state.engine.search(&params.q);
    Ok(Json(json!({
        "count": results.len(),
        "assessments": results,
    })))
}
