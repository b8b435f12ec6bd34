mod handlers;
mod state;
mod static_files;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::geocode::Resolver;

pub fn build_router(config: Config) -> Router {
    let state = Arc::new(AppState {
        resolver: Resolver::new(config.geocoding_api_key.clone()),
        config,
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .route("/api/geocode", get(handlers::geocode))
        .route("/api/config", get(handlers::client_config))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(config: Config, host: &str, port: u16) {
    let app = build_router(config);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!("pinpoint listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}
