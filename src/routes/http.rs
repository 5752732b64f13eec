// GET handlers: hello, health, metrics, version

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::liveness;

/// GET /api/hello — static greeting.
pub(super) async fn hello_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "message": state.greeting.as_ref() }))
}

/// GET /api/health — always 200; never touches the collector.
pub(super) async fn health_handler() -> impl IntoResponse {
    Json(liveness::health())
}

/// GET /api/metrics — one freshly collected snapshot, or 500 with the failure message.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collector.collect().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "collect_snapshot", "metrics collection failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch system metrics",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
