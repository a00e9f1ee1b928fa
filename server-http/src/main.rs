mod handlers;
mod models;
mod routes;
mod state;
mod validation;

use lingo::service::TranslationService;
use memo_store::MemoCache;
use shared::config::{self, Config};
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use translator_google::GoogleTranslator;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Lingo HTTP Server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = Arc::new(config::Config::from_env());

    // Initialize translation pipeline
    info!("Initializing translation service...");
    let state = init_translation_service(&config);

    // Build router
    let router = routes::build_router(state, &config);

    // Start server
    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("HTTP Server listening on http://{}", addr);
    info!("Try: curl -X POST http://{}/translate -H 'Content-Type: application/json' -d '{{\"text\":\"hello\",\"dest\":\"es\"}}'", addr);

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete.");
}

fn init_translation_service(config: &Arc<Config>) -> AppState {
    let translator = Arc::new(
        GoogleTranslator::new(
            &config.provider_url,
            Duration::from_secs(config.provider_timeout_secs),
        )
        .expect("Failed to initialize translation provider client"),
    );

    // The memo lives for the whole process and is shared across handlers
    let memo = Arc::new(MemoCache::new());

    let service = Arc::new(TranslationService::new(
        translator,
        memo,
        Duration::from_millis(config.pacing_ms),
    ));

    AppState::new(service)
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
