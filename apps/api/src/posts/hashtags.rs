//! Hashtag lookup — static keyword buckets, no I/O.

/// Keyword buckets in priority order. The first key found in the topic wins.
const HASHTAG_TABLE: &[(&str, [&str; 5])] = &[
    (
        "startup",
        ["#StartupLife", "#Entrepreneurship", "#Innovation", "#TechStartup", "#ScaleUp"],
    ),
    (
        "ai",
        [
            "#ArtificialIntelligence",
            "#MachineLearning",
            "#AI",
            "#TechInnovation",
            "#FutureOfWork",
        ],
    ),
    (
        "marketing",
        [
            "#Marketing",
            "#DigitalMarketing",
            "#ContentMarketing",
            "#MarketingStrategy",
            "#GrowthHacking",
        ],
    ),
    (
        "leadership",
        [
            "#Leadership",
            "#Management",
            "#ExecutiveLeadership",
            "#TeamBuilding",
            "#WorkplaceCulture",
        ],
    ),
    (
        "technology",
        [
            "#Technology",
            "#TechTrends",
            "#Innovation",
            "#DigitalTransformation",
            "#TechLeadership",
        ],
    ),
    (
        "career",
        [
            "#CareerGrowth",
            "#ProfessionalDevelopment",
            "#CareerAdvice",
            "#JobSearch",
            "#NetworkingTips",
        ],
    ),
];

const DEFAULT_HASHTAGS: [&str; 5] = ["#LinkedIn", "#Professional", "#Insights", "#Growth", "#Success"];

/// Returns the five hashtags for the first table key contained in `topic`
/// (case-insensitive), or the generic default set.
pub fn hashtags_for_topic(topic: &str) -> Vec<String> {
    let topic = topic.to_lowercase();
    let tags = HASHTAG_TABLE
        .iter()
        .find(|(key, _)| topic.contains(key))
        .map(|(_, tags)| tags)
        .unwrap_or(&DEFAULT_HASHTAGS);

    tags.iter().map(|t| t.to_string()).collect()
}
