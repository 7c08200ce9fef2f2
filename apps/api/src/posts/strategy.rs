//! Strategy synthesis — one model call whose free-text answer steers every post.

use crate::llm_client::LanguageModel;
use crate::posts::pipeline::{estimate_tokens, PipelineError, PipelineState};
use crate::posts::prompts::{fill_template, STRATEGY_PROMPT_TEMPLATE, STRATEGY_SYSTEM};

/// Runs the strategy stage. A model failure aborts the pipeline; there is no
/// fallback strategy.
pub async fn synthesize_strategy(
    state: PipelineState,
    llm: &dyn LanguageModel,
) -> Result<PipelineState, PipelineError> {
    let prompt = build_strategy_prompt(&state);
    let strategy = llm
        .complete(&prompt, STRATEGY_SYSTEM)
        .await
        .map_err(PipelineError::Strategy)?;

    let tokens_used = state.tokens_used + estimate_tokens(&strategy);

    Ok(PipelineState {
        strategy_text: Some(strategy),
        tokens_used,
        ..state
    })
}

fn build_strategy_prompt(state: &PipelineState) -> String {
    fill_template(
        STRATEGY_PROMPT_TEMPLATE,
        &[
            ("topic", &state.topic),
            ("tone", &state.tone),
            ("audience", &state.audience),
            ("length", state.length.as_str()),
            ("research_data", state.research_text.as_deref().unwrap_or("")),
        ],
    )
}
