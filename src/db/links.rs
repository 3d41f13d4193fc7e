//! Link database queries.
//!
//! Links are the sole persisted entity: a flat collection of
//! bookmarked URLs with click tracking and user-defined ordering.

use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

// ============================================================================
// Types
// ============================================================================

/// Link record from the database.
///
/// Serializes with the wire field names (camelCase, `order` for the
/// position column), so it doubles as the JSON response body.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i64,
    pub click_count: i64,
    pub created_at: String,
}

/// Input for creating a new link.
///
/// `url` is nullable here: the service performs no presence validation,
/// so a request without a url reaches the store and fails its NOT NULL
/// constraint.
#[derive(Debug, Clone, Default)]
pub struct CreateLink {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Input for updating a link.
///
/// Applied wholesale: all three columns are written, so omitted fields
/// clear to NULL.
#[derive(Debug, Clone, Default)]
pub struct UpdateLink {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// A single (id, order) pair in a reorder batch.
#[derive(Debug, Clone)]
pub struct ReorderEntry {
    pub id: String,
    pub order: i64,
}

/// Current UTC timestamp as an RFC3339 string.
///
/// Microsecond precision so lexicographic ordering matches
/// chronological ordering within a second.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ============================================================================
// Queries
// ============================================================================

/// Create a new link. The store assigns id, created_at, and the
/// click count / order defaults.
pub async fn create_link(pool: &DbPool, input: CreateLink) -> Result<Link> {
    sqlx::query_as::<_, Link>(
        r#"
        INSERT INTO links (id, title, url, description, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&input.title)
    .bind(&input.url)
    .bind(&input.description)
    .bind(now_rfc3339())
    .fetch_one(pool)
    .await
    .map_err(Error::Database)
}

/// Get a link by ID.
pub async fn get_link(pool: &DbPool, id: &str) -> Result<Link> {
    sqlx::query_as::<_, Link>("SELECT * FROM links WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound("Link not found".to_string()))
}

/// List all links, newest first.
pub async fn list_links(pool: &DbPool) -> Result<Vec<Link>> {
    sqlx::query_as::<_, Link>(
        r#"
        SELECT * FROM links
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(Error::Database)
}

/// Update a link (full replace of title/url/description).
pub async fn update_link(pool: &DbPool, id: &str, input: UpdateLink) -> Result<Link> {
    sqlx::query_as::<_, Link>(
        r#"
        UPDATE links
        SET title = ?, url = ?, description = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.url)
    .bind(&input.description)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound("Link not found".to_string()))
}

/// Delete a link by ID.
pub async fn delete_link(pool: &DbPool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM links WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound("Link not found".to_string()));
    }

    Ok(())
}

/// Apply a reorder batch as independent point updates.
///
/// Not transactional: a pair naming an unknown id affects zero rows and
/// is not reported, and a database error aborts the remainder without
/// rolling back pairs already applied.
pub async fn reorder_links(pool: &DbPool, entries: &[ReorderEntry]) -> Result<()> {
    for entry in entries {
        sqlx::query("UPDATE links SET sort_order = ? WHERE id = ?")
            .bind(entry.order)
            .bind(&entry.id)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Increment a link's click count, returning the updated record.
///
/// An unknown id yields None rather than an error.
pub async fn increment_click(pool: &DbPool, id: &str) -> Result<Option<Link>> {
    sqlx::query_as::<_, Link>(
        r#"
        UPDATE links
        SET click_count = click_count + 1
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(Error::Database)
}
