use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use switchboard_server::config::ServerConfig;
use switchboard_server::http::{AppState, router};
use switchboard_server::relay::SignalRelay;
use switchboard_server::transport::SessionMap;

/// Depth of the relay command queue. When the relay falls behind, sessions
/// feeding it are held back instead of the queue growing without bound.
const RELAY_QUEUE_DEPTH: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    let sessions = SessionMap::new();
    let (relay_tx, relay_rx) = mpsc::channel(RELAY_QUEUE_DEPTH);
    tokio::spawn(SignalRelay::new(relay_rx, Arc::new(sessions.clone())).run());

    let state = AppState { sessions, relay_tx };
    let app = router(state, &config.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Signaling server listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
