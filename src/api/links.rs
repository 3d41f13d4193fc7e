//! Link Routes
//!
//! CRUD, reorder, and click-tracking operations for links. Handlers
//! are thin one-to-one mappings onto the db layer.
//!
//! Routes:
//! - GET /links - List all links (newest first)
//! - POST /links - Create a new link
//! - GET /links/:id - Get a single link
//! - PUT /links/:id - Update a link (full replace)
//! - DELETE /links/:id - Delete a link
//! - PUT /links/reorder - Apply a reorder batch
//! - PUT /links/:id/click - Increment a link's click count

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::db::{self, Link};
use crate::{AppState, Error, Result};

/// Build link routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links).post(create_link))
        .route("/reorder", put(reorder_links))
        .route(
            "/:id",
            get(get_link).put(update_link).delete(delete_link),
        )
        .route("/:id/click", put(increment_click))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating or updating a link.
///
/// Every field is optional on the wire: the service performs no
/// presence validation (the client does), and update applies the
/// supplied object wholesale.
#[derive(Debug, Deserialize, Default)]
pub struct LinkBody {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Request body for the reorder batch.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    #[serde(rename = "reorderedLinks")]
    pub reordered_links: Vec<ReorderPair>,
}

/// One (id, order) pair. The wire key for the id is `_id`.
#[derive(Debug, Deserialize)]
pub struct ReorderPair {
    #[serde(rename = "_id")]
    pub id: String,
    pub order: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a new link.
///
/// POST /links
#[axum::debug_handler]
async fn create_link(
    State(state): State<AppState>,
    Json(body): Json<LinkBody>,
) -> Result<(StatusCode, Json<Link>)> {
    let link = db::create_link(
        &state.db,
        db::CreateLink {
            title: body.title,
            url: body.url,
            description: body.description,
        },
    )
    .await?;

    info!(id = %link.id, "Link created");

    Ok((StatusCode::CREATED, Json(link)))
}

/// List all links, newest first.
///
/// GET /links
#[axum::debug_handler]
async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<Link>>> {
    let links = db::list_links(&state.db).await?;
    Ok(Json(links))
}

/// Get a single link by ID.
///
/// GET /links/:id
#[axum::debug_handler]
async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Link>> {
    let link = db::get_link(&state.db, &id).await?;
    Ok(Json(link))
}

/// Update a link.
///
/// PUT /links/:id
///
/// The supplied object replaces title/url/description wholesale;
/// omitted fields are cleared.
#[axum::debug_handler]
async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<LinkBody>,
) -> Result<Json<Link>> {
    let link = db::update_link(
        &state.db,
        &id,
        db::UpdateLink {
            title: body.title,
            url: body.url,
            description: body.description,
        },
    )
    .await?;

    Ok(Json(link))
}

/// Delete a link.
///
/// DELETE /links/:id
#[axum::debug_handler]
async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    db::delete_link(&state.db, &id).await?;

    info!(id = %id, "Link deleted");

    Ok(Json(serde_json::json!({
        "message": "Link deleted successfully"
    })))
}

/// Apply a reorder batch.
///
/// PUT /links/reorder
///
/// Each pair is an independent point update; the batch is not
/// transactional and per-item failures are not reported.
#[axum::debug_handler]
async fn reorder_links(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<serde_json::Value>> {
    let entries: Vec<db::ReorderEntry> = body
        .reordered_links
        .into_iter()
        .map(|p| db::ReorderEntry {
            id: p.id,
            order: p.order,
        })
        .collect();

    db::reorder_links(&state.db, &entries)
        .await
        .map_err(|_| Error::Operation("Failed to reorder links".to_string()))?;

    Ok(Json(serde_json::json!({
        "message": "Links reordered successfully"
    })))
}

/// Increment a link's click count.
///
/// PUT /links/:id/click
///
/// An unknown id returns 200 with a JSON null body rather than 404.
#[axum::debug_handler]
async fn increment_click(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Link>>> {
    let link = db::increment_click(&state.db, &id)
        .await
        .map_err(|_| Error::Operation("Failed to update click count".to_string()))?;

    Ok(Json(link))
}
