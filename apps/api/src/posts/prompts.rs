// All LLM prompt constants for the post pipeline.
// Templates use `{placeholder}` markers filled with `fill_template` before sending.

/// Web search query template. Replace `{topic}`.
pub const RESEARCH_QUERY_TEMPLATE: &str = "LinkedIn {topic} trending posts 2024 2025";

/// System prompt for strategy synthesis.
pub const STRATEGY_SYSTEM: &str = "You are a LinkedIn content strategist. \
    Respond with plain text only.";

/// Strategy prompt template.
/// Replace: {topic}, {tone}, {audience}, {length}, {research_data}
pub const STRATEGY_PROMPT_TEMPLATE: &str = r#"You are a LinkedIn content strategist. Based on the following information, create a content strategy for LinkedIn posts:

Topic: {topic}
Tone: {tone}
Target Audience: {audience}
Preferred Length: {length}
Research Data: {research_data}

Create a strategy that includes:
1. Key messaging pillars
2. Content structure recommendations
3. Engagement tactics
4. Tone guidelines

Keep it concise but actionable."#;

/// System prompt for individual post generation.
pub const POST_SYSTEM: &str =
    "You are a LinkedIn content expert who creates engaging, professional posts.";

/// Post prompt template.
/// Replace: {topic}, {approach}, {instruction}, {tone}, {audience}, {length_guide},
///          {language}, {strategy}, {research}
pub const POST_PROMPT_TEMPLATE: &str = r#"You are an expert LinkedIn content creator. Create a single, high-quality LinkedIn post.

TOPIC: {topic}
APPROACH: {approach}
INSTRUCTION: {instruction}

REQUIREMENTS:
- Tone: {tone}
- Target Audience: {audience}
- Length: {length_guide}
- Language: {language}

CONTENT STRATEGY: {strategy}

RESEARCH INSIGHTS: {research}

Write an engaging LinkedIn post that:
1. Hooks readers in the first line
2. Provides value to the target audience
3. Uses the specified tone consistently
4. Follows the {approach} approach
5. Includes line breaks for readability
6. Ends with engagement (if this is a question/engagement post)

IMPORTANT: Write only the post content, no additional text or explanations."#;

/// Stands in for research text in the post prompt when none is available.
pub const NO_RESEARCH_PLACEHOLDER: &str = "No specific research data available";

/// Body of the post used when a generation call fails. Replace `{topic}`.
pub const FALLBACK_POST_TEMPLATE: &str = "🚀 Exploring {topic}

This is an exciting area that's transforming how we work and think. The potential applications are vast, and we're just scratching the surface.

Key considerations:
• Innovation opportunities
• Implementation challenges
• Future implications

The landscape is evolving rapidly, and staying informed is crucial for success.";

/// Fills every `{name}` marker in `template` from `values` in one left-to-right
/// pass. Substituted text is never rescanned, so values may contain braces.
/// Markers with no matching name are kept verbatim.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
