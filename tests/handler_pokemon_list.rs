mod common;

use common::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_uses_default_window() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(upstream_path("/pokemon")))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(20, 0)))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server.get("/pokemon").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 1302);
    assert_eq!(body["previous"], Value::Null);
    assert_eq!(body["results"].as_array().unwrap().len(), 20);
    assert_eq!(body["results"][0]["name"], "pokemon-1");
}

#[tokio::test]
async fn test_list_forwards_window() {
    let upstream = MockServer::start().await;
    Mock::given(path(upstream_path("/pokemon")))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(5, 10)))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server
        .get("/pokemon")
        .add_query_param("limit", 5)
        .add_query_param("offset", 10)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
    assert_eq!(body["results"][0]["name"], "pokemon-11");
    assert_eq!(
        body["next"],
        "https://pokeapi.co/api/v2/pokemon?offset=15&limit=5"
    );
}

#[tokio::test]
async fn test_empty_query_values_use_defaults() {
    let upstream = MockServer::start().await;
    Mock::given(path(upstream_path("/pokemon")))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(20, 0)))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server.get("/pokemon?limit=&offset=").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_out_of_range_window_makes_no_upstream_call() {
    let upstream = MockServer::start().await;
    expect_no_upstream_calls(&upstream).await;

    let server = create_test_server(&upstream);

    let cases = [
        ("/pokemon?limit=0", "Limit must be between 1 and 1000"),
        ("/pokemon?limit=1001", "Limit must be between 1 and 1000"),
        ("/pokemon?offset=-1", "Offset must be non-negative"),
        ("/pokemon?limit=0&offset=-1", "Limit must be between 1 and 1000"),
        ("/pokemon?limit=ten", "Limit must be an integer"),
        ("/pokemon?offset=1.5", "Offset must be an integer"),
    ];

    for (uri, detail) in cases {
        let response = server.get(uri).await;
        response.assert_status_bad_request();
        response.assert_json(&json!({ "detail": detail }));
    }
}

#[tokio::test]
async fn test_list_boundaries_are_accepted() {
    let upstream = MockServer::start().await;
    Mock::given(path(upstream_path("/pokemon")))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(1, 0)))
        .expect(2)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);

    server.get("/pokemon?limit=1&offset=0").await.assert_status_ok();
    server.get("/pokemon?limit=1000").await.assert_status_ok();
}

#[tokio::test]
async fn test_list_upstream_404_is_generic_not_found() {
    let upstream = MockServer::start().await;
    Mock::given(path(upstream_path("/pokemon")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server.get("/pokemon").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Resource not found" }));
}

#[tokio::test]
async fn test_list_shape_mismatch() {
    let upstream = MockServer::start().await;
    Mock::given(path(upstream_path("/pokemon")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": -3,
            "next": null,
            "previous": null,
            "results": [{ "name": "bulbasaur" }]
        })))
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server.get("/pokemon").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["detail"], "Invalid Pokemon data received from PokeAPI");
    assert_eq!(
        body["errors"]["count"],
        json!(["Ensure this value is greater than or equal to 0."])
    );
    assert_eq!(body["errors"]["results[0].url"], json!(["This field is required."]));
}
