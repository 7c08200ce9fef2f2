//! Scripted collaborators shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LanguageModel, LlmError};
use crate::posts::models::GenerationRequest;
use crate::search::{SearchError, SearchHit, WebSearch};

/// A request with every default applied.
pub fn request(topic: &str) -> GenerationRequest {
    serde_json::from_value(serde_json::json!({ "topic": topic })).unwrap()
}

/// Replays scripted responses in order. Once the script runs out it answers
/// with `fallback`, or fails when there is none.
pub struct ScriptedModel {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    fallback: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(text: &str) -> Self {
        Self {
            fallback: Some(text.to_string()),
            ..Self::new(Vec::new())
        }
    }

    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }
        self.fallback.clone().ok_or(LlmError::Api {
            status: 503,
            message: "scripted failure".to_string(),
        })
    }
}

/// Returns the same hits for every query, or fails every query.
pub struct StaticSearch {
    hits: Option<Vec<SearchHit>>,
    last_query: Mutex<Option<String>>,
}

impl StaticSearch {
    pub fn new(hits: Result<Vec<SearchHit>, SearchError>) -> Self {
        Self {
            hits: hits.ok(),
            last_query: Mutex::new(None),
        }
    }

    /// `count` hits titled `Result 1..=count` linking to `https://example.com/<n>`.
    pub fn with_hits(count: usize) -> Self {
        let hits = (1..=count)
            .map(|n| hit(n, format!("Snippet for result {n}.")))
            .collect();
        Self::new(Ok(hits))
    }

    /// Three hits sharing one snippet.
    pub fn with_snippet(snippet: String) -> Self {
        let hits = (1..=3).map(|n| hit(n, snippet.clone())).collect();
        Self::new(Ok(hits))
    }

    pub fn failing() -> Self {
        Self::new(Err(SearchError::Status(503)))
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

fn hit(n: usize, snippet: String) -> SearchHit {
    SearchHit {
        title: Some(format!("Result {n}")),
        link: format!("https://example.com/{n}"),
        snippet,
    }
}

#[async_trait]
impl WebSearch for StaticSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        *self.last_query.lock().unwrap() = Some(query.to_string());
        match &self.hits {
            Some(hits) => Ok(hits.iter().take(max_results).cloned().collect()),
            None => Err(SearchError::Status(503)),
        }
    }
}
