//! HTTP surface of the health chat backend.
//!
//! - `POST /v1/health/chat`: routed chat answer, standard or premium key
//! - `POST /v1/health/diagnose`: questionnaire / diagnosis, premium key only
//! - `GET  /docs/usage`: static usage hint, no key

pub mod core;
pub mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub use crate::core::{
    api_config::{ApiConfig, ApiKeys},
    app_state::AppState,
};
pub use crate::error_handler::{AppError, AppResult};

use crate::routes::{
    diagnose::diagnose_route::diagnose, health_chat::health_chat_route::health_chat,
    usage_route::usage_docs,
};

/// Builds the application router around an already-assembled state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health/chat", post(health_chat))
        .route("/v1/health/diagnose", post(diagnose))
        .route("/docs/usage", get(usage_docs))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Binds `address` and serves until Ctrl+C.
///
/// # Errors
/// [`AppError::Bind`] if the address cannot be bound, [`AppError::Server`]
/// if the server stops with an I/O error.
pub async fn start(address: &str, state: Arc<AppState>) -> Result<(), AppError> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(AppError::Bind)?;
    info!(%address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
