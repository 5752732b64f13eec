// HTTP routes

mod http;

use axum::{Router, http::HeaderValue, routing::get};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::collector::MetricsCollector;
use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<MetricsCollector>,
    pub(crate) greeting: Arc<str>,
}

pub fn app(collector: Arc<MetricsCollector>, config: &AppConfig) -> Router {
    let state = AppState {
        collector,
        greeting: config.server.greeting.as_str().into(),
    };
    Router::new()
        .route("/api/hello", get(http::hello_handler)) // GET /api/hello
        .route("/api/health", get(http::health_handler)) // GET /api/health
        .route("/api/metrics", get(http::metrics_handler)) // GET /api/metrics
        .route("/version", get(http::version_handler)) // GET /version
        .layer(cors_layer(&config.server.cors_origins))
        .with_state(state)
}

/// `"*"` anywhere in the list allows any origin; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
}
