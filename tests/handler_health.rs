mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server(&[]);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["credential_store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::make_failing_server();

    let response = server.get("/health").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["credential_store"]["status"], "error");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let server = common::make_server(&[]);

    let response = server.get("/does-not-exist").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/does-not-exist");
}
