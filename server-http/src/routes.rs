use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use shared::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build and configure the application router
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Translation routes
        .route("/translate", post(handlers::translate))
        .route("/bulk_translate", post(handlers::bulk_translate))
        // Middleware
        .layer(cors_layer(config))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Requests are accepted from the single configured frontend origin only;
// methods and headers are unrestricted.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| {
            warn!(
                "invalid LINGO_ALLOWED_ORIGIN '{}', falling back to http://localhost:5173",
                config.allowed_origin
            );
            HeaderValue::from_static("http://localhost:5173")
        });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
