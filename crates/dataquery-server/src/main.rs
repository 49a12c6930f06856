//! DataQuery site host
//!
//! Axum server that serves the trunk-built WASM bundle and a health probe.
//! It has no application endpoints of its own.

mod config;
mod handlers;
mod routes;
mod state;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Refuse to serve a site whose navigation or content lists are broken
    if let Err(e) = dataquery_core::catalog::validate() {
        tracing::error!("✗ {}", e.user_message());
        return Err(e).context("site catalog is invalid");
    }
    tracing::info!("✓ Catalog valid");

    let state = AppState::new(config.dist_dir.clone());
    if state.bundle_ready() {
        tracing::info!("✓ Serving bundle from {}", config.dist_dir.display());
    } else {
        tracing::warn!("⚠ No index.html in {}", config.dist_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 DataQuery site running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Site bundle (SPA fallback to index.html)");

    axum::serve(listener, app).await?;

    Ok(())
}
