//! HTTP health endpoint for hosting platforms that probe the process.
//!
//! Serves 200 on `/` and `/health`; anything else is axum's default 404.

use axum::{routing::get, Router};
use tracing::info;

const HEALTH_BODY: &str = "OK - Telegram Translator Bot is running";

async fn health() -> &'static str {
    HEALTH_BODY
}

fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

/// Binds `0.0.0.0:<port>` and serves the health router until the process
/// exits. Intended to run in a background task.
pub async fn serve_health(port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "Health check server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
