mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use linkpeek::api::handlers::{
    create_link_handler, delete_link_handler, fetch_metadata_handler, list_links_handler,
    resolve_handler,
};
use serde_json::json;

fn make_server(state: linkpeek::AppState) -> TestServer {
    let app = Router::new()
        .route("/s/{code}", get(resolve_handler))
        .route("/api/links", post(create_link_handler).get(list_links_handler))
        .route("/api/links/{code}", delete(delete_link_handler))
        .route("/api/metadata", post(fetch_metadata_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({
            "title": "Shoes",
            "description": "Fresh kicks",
            "destination_url": "https://shop.example/p/1"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert_eq!(
        body["short_url"].as_str().unwrap(),
        format!("https://go.example/s/{code}")
    );
}

#[tokio::test]
async fn test_created_link_resolves() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({
            "title": "Shoes",
            "destination_url": "https://shop.example/p/1"
        }))
        .await;
    response.assert_status_ok();

    let code = response.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let resolved = server
        .get(&format!("/s/{code}"))
        .add_header("User-Agent", "facebookexternalhit/1.1")
        .await;

    resolved.assert_status_ok();
    assert!(resolved.text().contains("Shoes"));
}

#[tokio::test]
async fn test_create_link_rejects_invalid_destination() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "destination_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_includes_click_counts() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "first", "First", "https://a.example/").await;
    common::seed_link(&store, "second", "Second", "https://b.example/").await;

    let server = make_server(state);

    // Two resolutions for one link.
    for _ in 0..2 {
        server
            .get("/s/first")
            .add_header("User-Agent", "Twitterbot/1.0")
            .await
            .assert_status_ok();
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let items = response.json::<serde_json::Value>();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let first = items
        .iter()
        .find(|item| item["code"] == "first")
        .unwrap();
    assert_eq!(first["click_count"], 2);
    assert_eq!(first["destination_url"], "https://a.example/");

    let second = items
        .iter()
        .find(|item| item["code"] == "second")
        .unwrap();
    assert_eq!(second["click_count"], 0);
}

#[tokio::test]
async fn test_list_links_respects_limit() {
    let (state, store) = common::create_test_state();
    for i in 0..5 {
        common::seed_link(&store, &format!("code{i}"), "T", "https://a.example/").await;
    }

    let server = make_server(state);

    let response = server.get("/api/links").add_query_param("limit", 2).await;
    response.assert_status_ok();

    let items = response.json::<serde_json::Value>();
    assert_eq!(items.as_array().unwrap().len(), 2);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_then_resolution_misses() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "gone", "Gone", "https://a.example/").await;

    let server = make_server(state);

    let response = server.delete("/api/links/gone").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["deleted"], true);

    server.get("/s/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_link_not_found() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server.delete("/api/links/missing").await;
    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

// ─── METADATA ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_metadata_returns_preview_fields() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/metadata")
        .json(&json!({ "url": "https://news.example/article" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Stub title");
    assert_eq!(body["description"], "Stub description");
    assert_eq!(body["image"], "https://cdn.example/stub.jpg");
}

#[tokio::test]
async fn test_fetch_metadata_rejects_invalid_url() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/metadata")
        .json(&json!({ "url": "notaurl" }))
        .await;

    response.assert_status_bad_request();
}
