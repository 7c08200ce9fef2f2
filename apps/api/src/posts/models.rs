use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /generate-posts`. Every field but `topic` has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Resolved to a [`PostLength`] when the pipeline state is built.
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_true")]
    pub include_hashtags: bool,
    #[serde(default = "default_true")]
    pub include_cta: bool,
    /// Clamped to at most 5 by the pipeline. Zero or negative yields no posts.
    #[serde(default = "default_post_count")]
    pub post_count: i64,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_audience() -> String {
    "general".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_true() -> bool {
    true
}

fn default_post_count() -> i64 {
    3
}

fn default_language() -> String {
    "english".to_string()
}

/// Target post length. Only the three listed values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLength {
    Short,
    Medium,
    Long,
}

impl PostLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostLength::Short => "short",
            PostLength::Medium => "medium",
            PostLength::Long => "long",
        }
    }

    /// Word-count guidance embedded in each post prompt.
    pub fn guide(&self) -> &'static str {
        match self {
            PostLength::Short => "Keep it concise, around 100-150 words. Focus on one key point.",
            PostLength::Medium => "Aim for 150-250 words. Develop the idea with some detail.",
            PostLength::Long => "Write 250-400 words. Provide comprehensive insights and examples.",
        }
    }
}

impl FromStr for PostLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(PostLength::Short),
            "medium" => Ok(PostLength::Medium),
            "long" => Ok(PostLength::Long),
            other => Err(other.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    Low,
    Medium,
    High,
}

/// One generated LinkedIn post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    /// Either empty or exactly five tags.
    pub hashtags: Vec<String>,
    /// Empty when CTAs were not requested.
    pub cta: String,
    pub estimated_engagement: Engagement,
    pub tone_used: String,
}

/// A search result the research stage drew on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Response body for `POST /generate-posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub posts: Vec<Post>,
    /// Wall-clock seconds, rounded to two decimals.
    pub generation_time: f64,
    pub tokens_used: u64,
    pub cost_estimate: f64,
    pub search_results_used: bool,
    pub citations: Vec<Citation>,
}
