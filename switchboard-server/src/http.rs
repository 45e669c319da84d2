use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AllowedOrigins;
use crate::relay::RelayCommand;
use crate::transport::{SessionMap, ws_handler};

/// Shared handles every connection handler gets a clone of.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionMap,
    pub relay_tx: mpsc::Sender<RelayCommand>,
}

/// Builds the HTTP surface: the WebSocket upgrade, a liveness probe and
/// the CORS policy around both.
pub fn router(state: AppState, origins: &AllowedOrigins) -> Router {
    let cors = match origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(list) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(list.iter().cloned()))
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Liveness only. Answers the same regardless of rooms or sessions.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
