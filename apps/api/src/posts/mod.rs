// LinkedIn post generation: research → strategy → per-post generation.
// All model calls go through the llm_client::LanguageModel trait and all web
// lookups through search::WebSearch.

pub mod approach;
pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod models;
pub mod options;
pub mod pipeline;
pub mod prompts;
pub mod research;
pub mod strategy;
