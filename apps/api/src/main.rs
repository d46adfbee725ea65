mod campaign;
mod config;
mod errors;
mod genai_client;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::genai_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::ImageStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Spark Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client
    let genai = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.genai_timeout_secs),
    )?;
    info!(
        "Generation client initialized (images: {}, text: {}, base: {})",
        genai_client::IMAGE_MODEL,
        genai_client::TEXT_MODEL,
        config.openai_base_url
    );

    tokio::fs::create_dir_all(&config.output_root).await?;
    info!("Image output root: {}", config.output_root.display());

    // Build app state
    let state = AppState {
        genai: Arc::new(genai),
        storage: ImageStore::new(config.output_root.clone()),
    };

    // Build router. The form front-end is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
