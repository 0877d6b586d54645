//! HTTP server

use std::sync::Arc;

use anyhow::Context;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use crate::webhook::{handle_webhook, WebhookState};

pub const WEBHOOK_ENDPOINT: &str = "/jira-webhook";

pub fn build_router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route(WEBHOOK_ENDPOINT, post(handle_webhook))
        .with_state(state)
}

/// Serve the webhook endpoint until interrupted
pub async fn run_server(state: Arc<WebhookState>, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve listen address")?;
    tracing::info!("server running on {}", local_addr);

    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("webhook server exited unexpectedly")?;
    Ok(())
}
