use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;
use crate::search::WebSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text completion backend. Default: `LlmClient` (Anthropic Messages API).
    pub llm: Arc<dyn LanguageModel>,
    /// Web search backend used by the research stage. Default: `TavilyClient`.
    pub search: Arc<dyn WebSearch>,
    pub config: Config,
}
