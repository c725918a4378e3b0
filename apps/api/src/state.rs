use std::sync::Arc;

use crate::config::Config;
use crate::engine::RecommendationEngine;
use crate::explanation::ExplanationProvider;
use crate::fetch::TextFetcher;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engine owns the immutable catalogue, so handlers read
/// it concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    /// Explanation provider. Production: `GeminiClient`; tests inject stubs.
    pub explainer: Arc<dyn ExplanationProvider>,
    /// JD text fetcher. Production: `HttpTextFetcher`; tests inject stubs.
    pub fetcher: Arc<dyn TextFetcher>,
    pub config: Config,
}
