mod common;

use common::*;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_health_check() {
    let upstream = MockServer::start().await;
    expect_no_upstream_calls(&upstream).await;

    let server = create_test_server(&upstream);
    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_does_not_depend_on_upstream() {
    let server = create_unreachable_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream);

    let response = server.get("/pokemon/species/1").await;
    response.assert_status_not_found();
}
