//! Text fetching for job-description URLs.
//!
//! The engine consumes this as an injected capability so ranking code can be
//! tested with deterministic stand-ins instead of live HTTP.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;

const FETCH_TIMEOUT_SECS: u64 = 15;

/// Capability trait: given a URL, return readable text.
/// Carried in `AppState` as `Arc<dyn TextFetcher>`.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

/// Production fetcher: HTTP GET with a hard timeout, then visible-text
/// extraction from the returned HTML. Prefers `<main>` content when the
/// page has one.
pub struct HttpTextFetcher {
    client: Client,
}

impl HttpTextFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpTextFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextFetcher for HttpTextFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{url}: HTTP {status}")));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("{url}: {e}")))?;

        let text = extract_visible_text(&html);
        debug!("Fetched {} chars of visible text from {url}", text.len());
        Ok(text)
    }
}

/// Strips markup from an HTML document, returning whitespace-normalized
/// visible text. Content inside `<script>` and `<style>` is dropped. When
/// the document has a `<main>` element, only its content is used.
pub fn extract_visible_text(html: &str) -> String {
    let scope = main_content(html).unwrap_or(html);

    let mut out = String::with_capacity(scope.len() / 2);
    let mut chars = scope.char_indices();
    let mut skip_until: Option<&str> = None;

    while let Some((i, c)) = chars.next() {
        if c != '<' {
            if skip_until.is_none() {
                out.push(c);
            }
            continue;
        }

        let rest = &scope[i..];
        if let Some(closing) = skip_until {
            if starts_with_ci(rest, closing) {
                skip_until = None;
            }
        } else if starts_with_ci(rest, "<script") {
            skip_until = Some("</script");
        } else if starts_with_ci(rest, "<style") {
            skip_until = Some("</style");
        }

        // Consume to the end of the tag; a tag acts as a word boundary.
        for (_, tc) in chars.by_ref() {
            if tc == '>' {
                break;
            }
        }
        out.push(' ');
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The inner content of the first `<main>` element, if any.
fn main_content(html: &str) -> Option<&str> {
    let open = find_ci(html, "<main")?;
    let open_end = html[open..].find('>').map(|off| open + off + 1)?;
    let close = find_ci(&html[open_end..], "</main").map(|off| open_end + off)?;
    Some(&html[open_end..close])
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Byte offset of an ASCII needle, case-insensitive. Matches always start at
/// an ASCII byte, so the returned offset is a valid char boundary.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
