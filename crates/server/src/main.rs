//! # salesboard-server
//!
//! REST API server for the sales reporting dashboard. Aggregate metrics
//! are recomputed from the raw sales table on every request; forecast
//! numbers come from the tables written by the `salesboard generate`
//! batch job. The two never talk directly — the CSV files are the only
//! handoff.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;

use config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salesboard_server=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST:PORT configuration");
    let static_dir = config.static_dir.clone();

    let state = AppState {
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health/live", get(routes::liveness))
        .route("/api/dashboard", get(routes::dashboard))
        .route("/api/forecast", get(routes::forecast))
        .route("/api/forecast-light", get(routes::forecast_light))
        .route("/api/filtered-data", get(routes::filtered_data))
        // Prebuilt dashboard pages
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    tracing::info!(
        "salesboard-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Received Ctrl+C, shutting down");
}
