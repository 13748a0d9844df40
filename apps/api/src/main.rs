mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::assembler::DocumentAssembler;
use crate::llm_client::{AiCapability, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Profile Builder API v{}", env!("CARGO_PKG_VERSION"));

    let ai = build_ai_capability(&config);
    let state = AppState {
        assembler: DocumentAssembler::new(ai, config.fallback_policy),
    };
    info!("AI fallback policy: {:?}", config.fallback_policy);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// A missing key disables enhancement instead of failing startup.
fn build_ai_capability(config: &Config) -> AiCapability {
    match &config.openai_api_key {
        Some(api_key) => {
            let client = OpenAiClient::new(
                api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            );
            info!("LLM client initialized (model: {})", config.openai_model);
            AiCapability::Enabled(Arc::new(client))
        }
        _ => {
            info!("OPENAI_API_KEY not set; AI enhancement disabled");
            AiCapability::Disabled
        }
    }
}
