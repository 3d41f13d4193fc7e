//! API Routes for LinkHub
//!
//! Combines all API routes into a single router.

mod links;
pub mod status;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the complete API router.
///
/// Route structure:
/// - / - Static greeting
/// - /health - Health check
/// - /links/* - Link CRUD, reorder, click tracking
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .nest("/links", links::routes())
}

/// Build the full application with middleware layers applied.
///
/// CORS is fully open: any origin, method, and header.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
