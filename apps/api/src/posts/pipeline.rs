//! Post pipeline — runs research → strategy → generation in strict sequence.
//!
//! Each stage takes the `PipelineState` by value and hands back the next one,
//! so a stage can only see what earlier stages returned. No stage is revisited
//! and nothing outlives the request.

use thiserror::Error;
use tracing::info;

use crate::llm_client::{LanguageModel, LlmError};
use crate::posts::generator::generate_posts;
use crate::posts::models::{Citation, GenerationRequest, Post, PostLength};
use crate::posts::research::research_topic;
use crate::posts::strategy::synthesize_strategy;
use crate::search::WebSearch;

/// Upper bound on posts per request.
pub const MAX_POST_COUNT: i64 = 5;

/// Rough tokens-per-word ratio used for the running usage estimate.
const TOKENS_PER_WORD: f64 = 1.3;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unknown length '{0}': expected one of short, medium, long")]
    UnknownLength(String),

    #[error("Strategy synthesis failed: {0}")]
    Strategy(#[source] LlmError),
}

/// Everything one request accumulates on its way through the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub topic: String,
    pub tone: String,
    pub audience: String,
    pub length: PostLength,
    pub include_hashtags: bool,
    pub include_cta: bool,
    pub post_count: usize,
    pub language: String,
    /// Set by research. Always `Some` once that stage has run.
    pub research_text: Option<String>,
    pub citations: Vec<Citation>,
    /// Set by strategy synthesis.
    pub strategy_text: Option<String>,
    pub generated_posts: Vec<Post>,
    /// Running estimate; never decreases.
    pub tokens_used: f64,
}

impl PipelineState {
    /// Builds the initial state. Fails on an unknown length before any
    /// external call is made.
    pub fn from_request(request: GenerationRequest) -> Result<Self, PipelineError> {
        let length = request
            .length
            .parse::<PostLength>()
            .map_err(PipelineError::UnknownLength)?;

        Ok(Self {
            topic: request.topic,
            tone: request.tone,
            audience: request.audience,
            length,
            include_hashtags: request.include_hashtags,
            include_cta: request.include_cta,
            post_count: request.post_count.clamp(0, MAX_POST_COUNT) as usize,
            language: request.language,
            research_text: None,
            citations: Vec::new(),
            strategy_text: None,
            generated_posts: Vec::new(),
            tokens_used: 0.0,
        })
    }

    /// True when research left behind non-empty text.
    pub fn research_available(&self) -> bool {
        self.research_text
            .as_deref()
            .is_some_and(|text| !text.is_empty())
    }
}

/// Word-count heuristic for model output: words × 1.3.
pub fn estimate_tokens(text: &str) -> f64 {
    text.split_whitespace().count() as f64 * TOKENS_PER_WORD
}

/// Runs all three stages to completion.
///
/// Research degrades instead of failing and per-post failures become fallback
/// posts, so the only stage error that reaches the caller is strategy's.
pub async fn run_pipeline(
    state: PipelineState,
    llm: &dyn LanguageModel,
    search: &dyn WebSearch,
) -> Result<PipelineState, PipelineError> {
    info!("Research stage: topic={:?}", state.topic);
    let state = research_topic(state, search).await;

    info!(
        "Strategy stage: {} citations gathered",
        state.citations.len()
    );
    let state = synthesize_strategy(state, llm).await?;

    info!("Generation stage: {} posts requested", state.post_count);
    let state = generate_posts(state, llm).await;

    info!(
        "Pipeline complete: {} posts, ~{:.0} tokens",
        state.generated_posts.len(),
        state.tokens_used
    );
    Ok(state)
}
