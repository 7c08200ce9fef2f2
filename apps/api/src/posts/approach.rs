//! Rhetorical approaches and the rules that hang off them: call-to-action
//! selection and the engagement heuristic.

use crate::posts::models::Engagement;

/// The five post styles, cycled in this order across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    Story,
    Data,
    Question,
    HowTo,
    Trends,
}

pub const APPROACHES: [Approach; 5] = [
    Approach::Story,
    Approach::Data,
    Approach::Question,
    Approach::HowTo,
    Approach::Trends,
];

/// CTA for fallback posts, independent of approach.
pub const FALLBACK_CTA: &str = "What's your take on this? Share your thoughts below!";

/// Content above this many characters is rated high engagement.
const HIGH_ENGAGEMENT_MIN_CHARS: usize = 200;
/// Content below this many characters is rated low engagement.
const LOW_ENGAGEMENT_MAX_CHARS: usize = 100;

impl Approach {
    /// Approach for the `index`-th post of a batch.
    pub fn for_index(index: usize) -> Approach {
        APPROACHES[index % APPROACHES.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Approach::Story => "Story/Personal Experience",
            Approach::Data => "Data/Insights",
            Approach::Question => "Question/Engagement",
            Approach::HowTo => "How-to/Educational",
            Approach::Trends => "Industry Trends",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Approach::Story => "Write a LinkedIn post that tells a personal story or anecdote related to the topic. Make it relatable and authentic.",
            Approach::Data => "Write a LinkedIn post that shares interesting data, statistics, or insights about the topic. Make it informative and valuable.",
            Approach::Question => "Write a LinkedIn post that asks thoughtful questions to spark discussion and engagement about the topic.",
            Approach::HowTo => "Write a LinkedIn post that provides actionable tips or educational content about the topic.",
            Approach::Trends => "Write a LinkedIn post that discusses current trends and future predictions related to the topic.",
        }
    }

    /// Closing call-to-action matched to the approach.
    pub fn cta(&self) -> &'static str {
        match self {
            Approach::Question => "What's your experience with this? Share in the comments! 👇",
            Approach::Story => "Can you relate? Share your own experience below!",
            Approach::Data => {
                "What do these insights mean for your industry? Let me know your thoughts!"
            }
            Approach::HowTo | Approach::Trends => {
                "What are your thoughts on this? I'd love to hear your perspective!"
            }
        }
    }

    /// Rates a generated post. Question posts and long posts rate high before
    /// the short-content check applies.
    pub fn estimate_engagement(&self, content: &str) -> Engagement {
        let chars = content.chars().count();
        if *self == Approach::Question || chars > HIGH_ENGAGEMENT_MIN_CHARS {
            Engagement::High
        } else if chars < LOW_ENGAGEMENT_MAX_CHARS {
            Engagement::Low
        } else {
            Engagement::Medium
        }
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest:
/// `"thought-leader"` becomes `"Thought-Leader"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
