//! Advertised tone and audience choices for clients building a request form.
//! Requests are not validated against these lists.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

const fn entry(value: &'static str, label: &'static str) -> OptionEntry {
    OptionEntry { value, label }
}

pub const TONES: &[OptionEntry] = &[
    entry("professional", "Professional"),
    entry("casual", "Casual & Friendly"),
    entry("thought-leader", "Thought Leadership"),
    entry("inspirational", "Inspirational"),
    entry("educational", "Educational"),
    entry("humorous", "Light & Humorous"),
    entry("storytelling", "Storytelling"),
];

pub const AUDIENCES: &[OptionEntry] = &[
    entry("general", "General Professional"),
    entry("executives", "Executives & Leaders"),
    entry("entrepreneurs", "Entrepreneurs"),
    entry("tech-professionals", "Tech Professionals"),
    entry("marketers", "Marketing Professionals"),
    entry("students", "Students & New Grads"),
    entry("consultants", "Consultants"),
    entry("salespeople", "Sales Professionals"),
];
