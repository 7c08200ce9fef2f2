//! Axum route handlers for the post generation API.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::posts::models::{GenerationRequest, GenerationResponse};
use crate::posts::options::{OptionEntry, AUDIENCES, TONES};
use crate::posts::pipeline::{run_pipeline, PipelineState};
use crate::state::AppState;

/// Flat per-token price used for the cost estimate.
const COST_PER_TOKEN: f64 = 0.00002;

#[derive(Debug, Serialize)]
pub struct TonesResponse {
    pub tones: &'static [OptionEntry],
}

#[derive(Debug, Serialize)]
pub struct AudiencesResponse {
    pub audiences: &'static [OptionEntry],
}

/// POST /generate-posts
///
/// Full pipeline: research → strategy → generation.
/// Returns exactly min(post_count, 5) posts or a single error for the whole request.
pub async fn handle_generate_posts(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let response = generate(&state, request)
        .instrument(info_span!("generate_posts", %request_id))
        .await?;
    Ok(Json(response))
}

async fn generate(
    state: &AppState,
    request: GenerationRequest,
) -> Result<GenerationResponse, AppError> {
    let started = Instant::now();

    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    state.config.require_api_key()?;

    info!("Starting generation for topic: {:?}", request.topic);

    let initial = PipelineState::from_request(request)?;
    let final_state = run_pipeline(initial, state.llm.as_ref(), state.search.as_ref()).await?;

    let response = build_response(final_state, started.elapsed().as_secs_f64());
    info!(
        "Successfully generated {} posts in {:.2}s",
        response.posts.len(),
        response.generation_time
    );
    Ok(response)
}

/// GET /tones
pub async fn handle_tones() -> Json<TonesResponse> {
    Json(TonesResponse { tones: TONES })
}

/// GET /audiences
pub async fn handle_audiences() -> Json<AudiencesResponse> {
    Json(AudiencesResponse {
        audiences: AUDIENCES,
    })
}

fn build_response(state: PipelineState, elapsed_secs: f64) -> GenerationResponse {
    let search_results_used = state.research_available();

    GenerationResponse {
        posts: state.generated_posts,
        generation_time: round_to(elapsed_secs, 2),
        tokens_used: state.tokens_used.max(0.0) as u64,
        cost_estimate: round_to(state.tokens_used * COST_PER_TOKEN, 4),
        search_results_used,
        citations: state.citations,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::request;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.0123456, 4), 0.0123);
        assert_eq!(round_to(2.0, 4), 2.0);
    }

    #[test]
    fn test_build_response_maps_metrics() {
        let mut state = PipelineState::from_request(request("AI")).unwrap();
        state.research_text = Some("Research findings for AI:\n\n".to_string());
        state.tokens_used = 612.9;

        let response = build_response(state, 1.23789);

        assert_eq!(response.tokens_used, 612);
        assert_eq!(response.cost_estimate, 0.0123);
        assert_eq!(response.generation_time, 1.24);
        assert!(response.search_results_used);
    }

    #[test]
    fn test_build_response_without_research() {
        let state = PipelineState::from_request(request("AI")).unwrap();
        let response = build_response(state, 0.0);
        assert!(!response.search_results_used);
        assert_eq!(response.tokens_used, 0);
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(TONES.len(), 7);
        assert_eq!(TONES[0].value, "professional");
        assert_eq!(AUDIENCES.len(), 8);
        assert!(AUDIENCES.iter().any(|a| a.value == "tech-professionals"));
    }
}
