mod catalogue;
mod config;
mod engine;
mod errors;
mod explanation;
mod fetch;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalogue::index::CatalogueIndex;
use crate::catalogue::loader::load_catalogue;
use crate::config::Config;
use crate::engine::ranker::RankerOptions;
use crate::engine::RecommendationEngine;
use crate::explanation::GeminiClient;
use crate::fetch::HttpTextFetcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Assessment Recommendation API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load the catalogue; any failure here is fatal — never serve with a
    // partially loaded catalogue.
    let items = load_catalogue(Path::new(&config.catalogue_path))?;
    let catalogue = CatalogueIndex::load(items)?;
    info!("Catalogue index built ({} assessments)", catalogue.len());

    let options = RankerOptions {
        duration_hard_filter: config.duration_hard_filter,
    };
    let engine = Arc::new(RecommendationEngine::new(catalogue, options));
    info!(
        "Recommendation engine initialized (duration_hard_filter: {})",
        options.duration_hard_filter
    );

    // External collaborators: explanation provider and JD text fetcher
    let explainer = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    let fetcher = Arc::new(HttpTextFetcher::new());

    let state = AppState {
        engine,
        explainer,
        fetcher,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
