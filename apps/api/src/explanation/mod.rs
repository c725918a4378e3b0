//! Explanation generation: builds a deterministic prompt from a query and
//! its ranked results, then delegates to an injected explanation provider.
//!
//! ARCHITECTURAL RULE: no other module calls the Gemini API directly. All
//! explanation traffic goes through `ExplanationProvider`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::query::RankedResult;
use crate::errors::AppError;
use crate::explanation::prompts::build_explanation_prompt;

pub mod handlers;
pub mod prompts;

const GEMINI_GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/\
                                   models/gemini-1.5-flash:generateContent";
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Capability trait for the external explanation model.
/// Carried in `AppState` as `Arc<dyn ExplanationProvider>`.
///
/// A failed call surfaces as an error; there are no retries.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Generates the explanation for a ranked list. Fails with
/// `ExplanationProvider` if the provider errors or returns empty text —
/// never substitutes filler.
pub async fn explain(
    query_text: &str,
    results: &[RankedResult],
    provider: &dyn ExplanationProvider,
) -> Result<String, AppError> {
    let prompt = build_explanation_prompt(query_text, results);
    let text = provider.generate(&prompt).await?;
    if text.trim().is_empty() {
        return Err(AppError::ExplanationProvider(
            "provider returned empty text".to_string(),
        ));
    }
    Ok(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini REST client — the production provider
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

/// Production provider backed by the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl ExplanationProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_GENERATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExplanationProvider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExplanationProvider(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExplanationProvider(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        debug!("Explanation provider returned {} chars", text.len());
        Ok(text)
    }
}
