//! Post generation — one model call per post, cycling through the approaches.
//!
//! A failed call never shortens the batch: the post is replaced with a fixed
//! fallback and the loop moves on.

use tracing::{debug, error};

use crate::llm_client::LanguageModel;
use crate::posts::approach::{title_case, Approach, FALLBACK_CTA};
use crate::posts::hashtags::hashtags_for_topic;
use crate::posts::models::{Engagement, Post};
use crate::posts::pipeline::{estimate_tokens, PipelineState};
use crate::posts::prompts::{
    fill_template, FALLBACK_POST_TEMPLATE, NO_RESEARCH_PLACEHOLDER, POST_PROMPT_TEMPLATE,
    POST_SYSTEM,
};
use crate::posts::research::truncate_chars;

/// Research text characters embedded in each post prompt.
const RESEARCH_EXCERPT_CHARS: usize = 500;
/// Token estimate charged for a post that fell back.
pub const FALLBACK_TOKEN_COST: f64 = 200.0;

/// Runs the generation stage and returns the state with exactly `post_count`
/// posts, in approach-cycle order.
pub async fn generate_posts(state: PipelineState, llm: &dyn LanguageModel) -> PipelineState {
    let mut posts = Vec::with_capacity(state.post_count);
    let mut tokens_used = state.tokens_used;
    let tone_used = title_case(&state.tone);

    for i in 0..state.post_count {
        let approach = Approach::for_index(i);
        let prompt = build_post_prompt(&state, approach);

        let post = match llm.complete(&prompt, POST_SYSTEM).await {
            Ok(output) => {
                tokens_used += estimate_tokens(&output);
                let content = output.trim().to_string();
                debug!(
                    "Post {} ({}) generated: {} chars",
                    i + 1,
                    approach.name(),
                    content.chars().count()
                );
                Post {
                    estimated_engagement: approach.estimate_engagement(&content),
                    content,
                    hashtags: hashtags_if(&state),
                    cta: if state.include_cta {
                        approach.cta().to_string()
                    } else {
                        String::new()
                    },
                    tone_used: tone_used.clone(),
                }
            }
            Err(e) => {
                error!("Error generating post {}: {e}", i + 1);
                tokens_used += FALLBACK_TOKEN_COST;
                fallback_post(&state, &tone_used)
            }
        };

        posts.push(post);
    }

    PipelineState {
        generated_posts: posts,
        tokens_used,
        ..state
    }
}

fn hashtags_if(state: &PipelineState) -> Vec<String> {
    if state.include_hashtags {
        hashtags_for_topic(&state.topic)
    } else {
        Vec::new()
    }
}

fn fallback_post(state: &PipelineState, tone_used: &str) -> Post {
    Post {
        content: fill_template(FALLBACK_POST_TEMPLATE, &[("topic", &state.topic)]),
        hashtags: hashtags_if(state),
        cta: if state.include_cta {
            FALLBACK_CTA.to_string()
        } else {
            String::new()
        },
        estimated_engagement: Engagement::Medium,
        tone_used: tone_used.to_string(),
    }
}

fn build_post_prompt(state: &PipelineState, approach: Approach) -> String {
    let research = match state.research_text.as_deref() {
        Some(text) if !text.is_empty() => truncate_chars(text, RESEARCH_EXCERPT_CHARS),
        _ => NO_RESEARCH_PLACEHOLDER,
    };

    fill_template(
        POST_PROMPT_TEMPLATE,
        &[
            ("topic", &state.topic),
            ("approach", approach.name()),
            ("instruction", approach.instruction()),
            ("tone", &state.tone),
            ("audience", &state.audience),
            ("length_guide", state.length.guide()),
            ("language", &state.language),
            ("strategy", state.strategy_text.as_deref().unwrap_or("")),
            ("research", research),
        ],
    )
}
