use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalogue_path: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// When set, items over `max_duration_minutes` are removed before scoring
    /// instead of merely scoring lower on the duration dimension.
    pub duration_hard_filter: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalogue_path: std::env::var("CATALOGUE_PATH")
                .unwrap_or_else(|_| "product_catalogue.json".to_string()),
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            duration_hard_filter: std::env::var("DURATION_HARD_FILTER")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
