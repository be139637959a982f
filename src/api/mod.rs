pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router. Public so integration tests can run
/// against the real routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/balance", post(handlers::balance))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the HTTP API until the process is stopped.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let app = router(AppState::new());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    tracing::info!("chain-balance API listening on {addr}");
    tracing::info!("  Health:  GET  http://{addr}/health");
    tracing::info!("  Balance: POST http://{addr}/api/balance");

    axum::serve(listener, app).await.context("running server")?;

    Ok(())
}
