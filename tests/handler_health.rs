mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::fizzbuzz_app(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = TestServer::new(common::fizzbuzz_app(common::create_failing_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
    assert!(json["checks"]["storage"]["message"].is_string());
}
