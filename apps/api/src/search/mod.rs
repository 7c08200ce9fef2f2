//! Web search — the research stage's window onto current topic coverage.
//!
//! `TavilyClient` talks to the Tavily search API, which returns ranked web
//! results with a title, URL and content extract. The pipeline only sees the
//! [`WebSearch`] trait, so a failing or rate-limited backend can be simulated
//! in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const SEARCH_DEPTH: &str = "basic";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API returned status {0}")]
    Status(u16),

    #[error("Malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: Option<String>,
    pub link: String,
    pub snippet: String,
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Returns at most `max_results` hits, best first.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Tavily payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    query: &'a str,
    max_results: usize,
    search_depth: &'a str,
    include_raw_content: bool,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

impl TavilySearchResponse {
    fn into_hits(self, max_results: usize) -> Vec<SearchHit> {
        self.results
            .into_iter()
            .take(max_results)
            .map(|result| SearchHit {
                title: result.title.filter(|t| !t.trim().is_empty()),
                link: result.url,
                snippet: result.content,
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct TavilyClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl TavilyClient {
    pub fn new(api_key: Option<String>, api_url: String) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&TavilySearchRequest {
                query,
                max_results,
                search_depth: SEARCH_DEPTH,
                include_raw_content: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: TavilySearchResponse = serde_json::from_str(&body)?;
        let hits = parsed.into_hits(max_results);

        debug!("Search for {:?} returned {} hits", query, hits.len());
        Ok(hits)
    }
}
