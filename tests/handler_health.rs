mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkpeek::api::handlers::health_handler;

fn make_server(state: linkpeek::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let server = make_server(common::create_failing_state());

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}
