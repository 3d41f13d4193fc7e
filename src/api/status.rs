//! Status Routes
//!
//! Root greeting and health check.
//!
//! Routes:
//! - GET / - Static greeting
//! - GET /health - Basic health check

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health_check))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Static greeting.
///
/// GET /
#[axum::debug_handler]
async fn greeting() -> &'static str {
    "Welcome to the LinkHub API"
}

/// Basic health check.
///
/// GET /health
///
/// Returns 200 if the server is running.
#[axum::debug_handler]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: Utc::now(),
    })
}
