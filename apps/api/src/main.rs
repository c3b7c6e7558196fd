mod catalog;
mod config;
mod dashboard;
mod errors;
mod insights;
mod navigation;
mod render;
mod routes;
mod session;
mod state;
mod wizard;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::insights::gemini::GeminiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HubInsights API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the catalog before accepting traffic
    let catalog = Catalog::seeded();
    catalog.validate().context("Built-in catalog is invalid")?;
    info!(
        "Catalog loaded: {} hubs, {} reviews, {} candidates",
        catalog.hubs().len(),
        catalog.reviews().len(),
        catalog.candidates().len()
    );

    // Initialize insight client
    let gemini = GeminiClient::new(config.gemini_api_key.clone())
        .context("Failed to build insight HTTP client")?;
    if gemini.has_api_key() {
        info!("Insight client initialized (model: {})", insights::gemini::MODEL);
    } else {
        warn!("GEMINI_API_KEY not set; insights will show fallback text");
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        sessions: SessionStore::default(),
        insights: Arc::new(gemini),
        config: config.clone(),
    };

    state
        .sessions
        .spawn_expiry(Duration::from_secs(config.session_idle_secs));
    info!("Idle sessions expire after {}s", config.session_idle_secs);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
