//! PlantMD API Server

use axum::{
    routing::{get, post},
    Router,
};
use chrono::Utc;
use ledger::{FileStore, Ledger};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plant_md=debug".parse()?)
                .add_directive("api=debug".parse()?),
        )
        .init();

    info!("🌱 Starting PlantMD API");

    // Load configuration
    let config = common::Config::from_env();

    // Open the diagnosis ledger (seeds on first run)
    let store = FileStore::new(&config.data_dir);
    let ledger = Ledger::open(store, Utc::now().timestamp_millis()).await;

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), ledger));

    // Build API router with state
    let api_router = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/diagnose", post(routes::diagnoses::diagnose))
        .route("/api/diagnoses", get(routes::diagnoses::list))
        .route("/api/diagnoses/:id", get(routes::diagnoses::get))
        .route("/api/stats", get(routes::stats::get))
        .route("/api/achievements", get(routes::achievements::list))
        .route("/api/collection", get(routes::collection::list))
        .with_state(state);

    // Build full router with static file serving and SPA fallback
    // Serve static files, but fall back to index.html for SPA routing
    let static_service = ServeDir::new("static")
        .append_index_html_on_directories(true)
        .fallback(tower_http::services::ServeFile::new("static/index.html"));

    let app = api_router
        .fallback_service(static_service)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
