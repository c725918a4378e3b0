pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::catalogue::handlers as catalogue_handlers;
use crate::engine::handlers as engine_handlers;
use crate::explanation::handlers as explanation_handlers;
use crate::state::AppState;

/// GET /
/// Self-describing endpoint index.
async fn index_handler() -> Json<Value> {
    Json(json!({
        "service": "Assessment Recommendation Engine API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "GET /": "API documentation (this endpoint)",
            "GET /health": "Health check endpoint",
            "GET /assessments": "List all assessments in the catalogue",
            "GET /assessments/:id": "Get a specific assessment by ID",
            "GET /assessments/search?q=term": "Search assessments by name or description",
            "GET /recommendations": "Recommendations via query parameters (structured filters)",
            "POST /recommendations": "Recommendations via JSON body (structured filters)",
            "POST /text_recommendations": "Recommendations from natural language or a JD URL",
            "POST /explanations": "LLM-generated explanation for text-based recommendations",
        },
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health::health_handler))
        .route("/assessments", get(catalogue_handlers::handle_list))
        .route(
            "/assessments/search",
            get(catalogue_handlers::handle_search),
        )
        .route("/assessments/:id", get(catalogue_handlers::handle_get))
        .route(
            "/recommendations",
            get(engine_handlers::handle_recommend_get).post(engine_handlers::handle_recommend_post),
        )
        .route(
            "/text_recommendations",
            post(engine_handlers::handle_text_recommend),
        )
        .route("/explanations", post(explanation_handlers::handle_explain))
        .with_state(state)
}
