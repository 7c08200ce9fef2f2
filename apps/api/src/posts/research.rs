//! Trend research — turns web search hits into prompt context and citations.
//!
//! Never fails: any search error degrades to a generic placeholder so the
//! rest of the pipeline can run.

use tracing::{info, warn};

use crate::posts::models::Citation;
use crate::posts::pipeline::PipelineState;
use crate::posts::prompts::{fill_template, RESEARCH_QUERY_TEMPLATE};
use crate::search::{SearchHit, WebSearch};

/// Results requested from the search backend.
const SEARCH_MAX_RESULTS: usize = 5;
/// Results folded into research text and citations.
const RESEARCH_RESULT_LIMIT: usize = 3;
/// Per-result snippet bound inside the research text.
const SNIPPET_CHAR_LIMIT: usize = 200;
/// Bound on the assembled research text, in characters.
pub const RESEARCH_TEXT_LIMIT: usize = 1000;

/// Runs the research stage and returns the state with `research_text` and
/// `citations` filled in.
pub async fn research_topic(state: PipelineState, search: &dyn WebSearch) -> PipelineState {
    let query = fill_template(RESEARCH_QUERY_TEMPLATE, &[("topic", &state.topic)]);

    let (research_text, citations) = match search.search(&query, SEARCH_MAX_RESULTS).await {
        Ok(hits) => {
            let findings = summarize_hits(&state.topic, &hits);
            info!("Research found {} usable results", findings.1.len());
            findings
        }
        Err(e) => {
            warn!("Search error for {:?}: {e}", state.topic);
            (format!("General insights about {}", state.topic), Vec::new())
        }
    };

    PipelineState {
        research_text: Some(research_text),
        citations,
        ..state
    }
}

/// Builds the bounded research summary and the matching citations from the
/// top results.
fn summarize_hits(topic: &str, hits: &[SearchHit]) -> (String, Vec<Citation>) {
    let mut text = format!("Research findings for {topic}:\n\n");
    let mut citations = Vec::new();

    for (i, hit) in hits.iter().take(RESEARCH_RESULT_LIMIT).enumerate() {
        let title = hit.title.clone().unwrap_or_else(|| "Untitled".to_string());
        text.push_str(&format!(
            "{}. {}\n{}...\n\n",
            i + 1,
            title,
            truncate_chars(&hit.snippet, SNIPPET_CHAR_LIMIT)
        ));
        citations.push(Citation {
            title,
            link: hit.link.clone(),
            snippet: hit.snippet.clone(),
        });
    }

    (
        truncate_chars(&text, RESEARCH_TEXT_LIMIT).to_string(),
        citations,
    )
}

/// Returns at most the first `max` characters of `s`, never splitting a char.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::TavilyClient;
    use crate::test_support::{request, StaticSearch};

    fn initial_state(topic: &str) -> PipelineState {
        PipelineState::from_request(request(topic)).unwrap()
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("🚀🚀🚀", 1), "🚀");
    }

    #[tokio::test]
    async fn test_successful_search_fills_text_and_citations() {
        let search = StaticSearch::with_hits(5);
        let state = research_topic(initial_state("AI in healthcare"), &search).await;

        let text = state.research_text.unwrap();
        assert!(text.starts_with("Research findings for AI in healthcare:\n\n1. Result 1\n"));
        assert!(text.contains("3. Result 3"));
        assert!(!text.contains("4. Result 4"), "only the top 3 results are used");
        assert_eq!(state.citations.len(), 3);
        assert_eq!(state.citations[0].link, "https://example.com/1");
        assert_eq!(
            search.last_query().as_deref(),
            Some("LinkedIn AI in healthcare trending posts 2024 2025")
        );
    }

    #[tokio::test]
    async fn test_research_text_is_bounded() {
        let hits: Vec<SearchHit> = (1..=3)
            .map(|n| SearchHit {
                title: Some(format!("{n}").repeat(400)),
                link: format!("https://example.com/{n}"),
                snippet: "word ".repeat(400),
            })
            .collect();
        // Each entry alone is over 600 chars, so three of them overflow the bound
        let search = StaticSearch::new(Ok(hits));
        let state = research_topic(initial_state("AI"), &search).await;

        let text = state.research_text.unwrap();
        assert_eq!(text.chars().count(), RESEARCH_TEXT_LIMIT);
        assert!(text.starts_with("Research findings for AI:\n\n1. 111"));
        // Citations keep the full title and snippet
        assert_eq!(state.citations.len(), 3);
        assert_eq!(state.citations[2].title, "3".repeat(400));
        assert_eq!(state.citations[0].snippet.len(), 2000);
    }

    #[tokio::test]
    async fn test_short_research_text_is_left_whole() {
        let search = StaticSearch::with_snippet("word ".repeat(400));
        let state = research_topic(initial_state("AI"), &search).await;

        let text = state.research_text.unwrap();
        assert!(text.chars().count() < RESEARCH_TEXT_LIMIT);
        assert!(text.ends_with("...\n\n"));
    }

    #[tokio::test]
    async fn test_missing_title_becomes_untitled() {
        let search = StaticSearch::new(Ok(vec![SearchHit {
            title: None,
            link: String::new(),
            snippet: "snippet".to_string(),
        }]));
        let state = research_topic(initial_state("AI"), &search).await;
        assert_eq!(state.citations[0].title, "Untitled");
        assert_eq!(state.citations[0].link, "");
    }

    #[tokio::test]
    async fn test_search_failure_degrades_to_placeholder() {
        let search = StaticSearch::failing();
        let state = research_topic(initial_state("Remote work"), &search).await;

        assert_eq!(
            state.research_text.as_deref(),
            Some("General insights about Remote work")
        );
        assert!(state.citations.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_search_backend_degrades_to_placeholder() {
        let search = TavilyClient::new(None, "http://127.0.0.1:9/search".to_string()).unwrap();
        let state = research_topic(initial_state("Remote work"), &search).await;

        assert_eq!(
            state.research_text.as_deref(),
            Some("General insights about Remote work")
        );
        assert!(state.citations.is_empty());
    }

    #[tokio::test]
    async fn test_no_results_yields_header_only() {
        let search = StaticSearch::new(Ok(Vec::new()));
        let state = research_topic(initial_state("Remote work"), &search).await;

        assert_eq!(
            state.research_text.as_deref(),
            Some("Research findings for Remote work:\n\n")
        );
        assert!(state.citations.is_empty());
    }
}
