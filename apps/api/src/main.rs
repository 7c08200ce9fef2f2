mod config;
mod errors;
mod llm_client;
mod posts;
mod routes;
mod search;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::TavilyClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LinkedIn Post Generator API v{}", env!("CARGO_PKG_VERSION"));

    // Generation requests are rejected until a real key is configured
    if let Err(e) = config.require_api_key() {
        warn!("{e}");
    }

    let llm = LlmClient::new(
        config.anthropic_api_key.clone().unwrap_or_default(),
        config.anthropic_api_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if config.tavily_api_key.is_none() {
        warn!("TAVILY_API_KEY not set; research will fall back to generic insights");
    }
    let search = TavilyClient::new(
        config.tavily_api_key.clone(),
        config.search_api_url.clone(),
    )?;
    info!("Search client initialized ({})", config.search_api_url);

    let state = AppState {
        llm: Arc::new(llm),
        search: Arc::new(search),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
