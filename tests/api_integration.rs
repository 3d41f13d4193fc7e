//! API Integration Tests for the LinkHub server
//!
//! Tests the REST surface end to end using axum-test over
//! an in-memory SQLite database.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use linkhub::{api, db, AppState};
use serde_json::{json, Value};

// ============================================================================
// Test Setup Helpers
// ============================================================================

/// Create a test server over an in-memory database.
async fn setup_server() -> TestServer {
    let pool = db::init_pool(":memory:")
        .await
        .expect("Failed to create test database");
    db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    TestServer::new(api::app(AppState::with_pool(pool))).expect("Failed to start test server")
}

/// Create a link via the API, returning the response body.
async fn create_link(server: &TestServer, title: &str, url: &str) -> Value {
    let response = server
        .post("/links")
        .json(&json!({ "title": title, "url": url, "description": null }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_root_greeting() {
    let server = setup_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Welcome to the LinkHub API");
}

#[tokio::test]
async fn test_health_check() {
    let server = setup_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_link_returns_full_record() {
    let server = setup_server().await;
    let before = Utc::now();

    let link = create_link(&server, "Docs", "https://example.com").await;

    assert!(!link["id"].as_str().unwrap().is_empty());
    assert_eq!(link["title"], "Docs");
    assert_eq!(link["url"], "https://example.com");
    assert_eq!(link["clickCount"], 0);
    assert_eq!(link["order"], 0);

    let created_at = DateTime::parse_from_rfc3339(link["createdAt"].as_str().unwrap())
        .expect("createdAt should be RFC3339")
        .with_timezone(&Utc);
    assert!(created_at >= before);
}

#[tokio::test]
async fn test_create_without_url_is_operation_failure() {
    let server = setup_server().await;

    let response = server
        .post("/links")
        .json(&json!({ "title": "No url" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let server = setup_server().await;

    let first = create_link(&server, "First", "https://a.test").await;
    let second = create_link(&server, "Second", "https://b.test").await;

    let response = server.get("/links").await;
    response.assert_status_ok();
    let links: Vec<Value> = response.json();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["id"], second["id"]);
    assert_eq!(links[1]["id"], first["id"]);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = setup_server().await;

    let response = server.get("/links/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Link not found");
}

#[tokio::test]
async fn test_update_replaces_fields_wholesale() {
    let server = setup_server().await;

    let created = server
        .post("/links")
        .json(&json!({
            "title": "Docs",
            "url": "https://example.com",
            "description": "Reference docs"
        }))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    // Omitted description is cleared, not preserved
    let response = server
        .put(&format!("/links/{}", id))
        .json(&json!({ "title": "Docs v2", "url": "https://example.com" }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "Docs v2");
    assert!(updated["description"].is_null());
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = setup_server().await;

    let response = server
        .put("/links/missing")
        .json(&json!({ "title": "T", "url": "https://example.com" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found_never_failure() {
    let server = setup_server().await;

    let response = server.delete("/links/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_click_counts_up_from_zero() {
    let server = setup_server().await;

    let link = create_link(&server, "Docs", "https://example.com").await;
    let id = link["id"].as_str().unwrap();

    for expected in 1..=3 {
        let response = server.put(&format!("/links/{}/click", id)).await;
        response.assert_status_ok();
        let updated: Value = response.json();
        assert_eq!(updated["clickCount"], expected);
    }
}

#[tokio::test]
async fn test_click_unknown_id_returns_null() {
    let server = setup_server().await;

    let response = server.put("/links/missing/click").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_reorder_batch() {
    let server = setup_server().await;

    let a = create_link(&server, "A", "https://a.test").await;
    let b = create_link(&server, "B", "https://b.test").await;

    let response = server
        .put("/links/reorder")
        .json(&json!({
            "reorderedLinks": [
                { "_id": a["id"], "order": 2 },
                { "_id": b["id"], "order": 1 },
            ]
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Links reordered successfully");

    // Default list sort stays createdAt-based; sort by order client-side
    let mut links: Vec<Value> = server.get("/links").await.json();
    links.sort_by_key(|l| l["order"].as_i64().unwrap());
    assert_eq!(links[0]["id"], b["id"]);
    assert_eq!(links[1]["id"], a["id"]);
}

#[tokio::test]
async fn test_full_link_lifecycle() {
    let server = setup_server().await;

    // Create
    let link = create_link(&server, "Docs", "https://example.com").await;
    let id = link["id"].as_str().unwrap().to_string();
    assert_eq!(link["clickCount"], 0);

    // Click
    let clicked: Value = server.put(&format!("/links/{}/click", id)).await.json();
    assert_eq!(clicked["clickCount"], 1);

    // Update
    let response = server
        .put(&format!("/links/{}", id))
        .json(&json!({
            "title": "Docs v2",
            "url": "https://example.com",
            "description": ""
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["title"], "Docs v2");

    // Delete, then gone
    server.delete(&format!("/links/{}", id)).await.assert_status_ok();
    server
        .get(&format!("/links/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
