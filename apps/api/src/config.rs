use anyhow::{Context, Result};

use crate::errors::AppError;

const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_SEARCH_API_URL: &str = "https://api.tavily.com/search";

/// Value shipped in `.env.example`. Treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-anthropic-api-key-here";

/// Application configuration loaded from environment variables.
///
/// The model credential is optional at startup so the read-only endpoints keep
/// working; generation requests check it through [`Config::require_api_key`].
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    /// Search credential. Without it research degrades to a placeholder.
    pub tavily_api_key: Option<String>,
    pub search_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_API_URL.to_string()),
            tavily_api_key: std::env::var("TAVILY_API_KEY").ok(),
            search_api_url: std::env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the model credential, or a configuration error when it is
    /// missing, blank, or still set to a placeholder.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        match self.anthropic_api_key.as_deref() {
            Some(key) if !is_placeholder_key(key) => Ok(key),
            _ => Err(AppError::Configuration(
                "Anthropic API key not configured. Please set the ANTHROPIC_API_KEY environment variable."
                    .to_string(),
            )),
        }
    }
}

fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim();
    key.is_empty() || key == PLACEHOLDER_API_KEY || key.starts_with("your-")
}
