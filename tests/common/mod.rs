#![allow(dead_code)]

use axum_test::TestServer;
use pokeapi_gateway::infrastructure::pokeapi::UpstreamSettings;
use pokeapi_gateway::routes::routes;
use pokeapi_gateway::state::AppState;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock upstream serves under, like `https://pokeapi.co/api/v2`.
pub const API_PREFIX: &str = "/api/v2";

pub fn create_test_state(base_url: &str) -> AppState {
    AppState::new(UpstreamSettings::new(base_url, Duration::from_secs(5)))
}

/// Test server whose upstream is the given mock server.
pub fn create_test_server(upstream: &MockServer) -> TestServer {
    let state = create_test_state(&format!("{}{}", upstream.uri(), API_PREFIX));
    TestServer::new(routes().with_state(state)).unwrap()
}

/// Test server whose upstream refuses connections.
pub fn create_unreachable_server() -> TestServer {
    let state = create_test_state(&format!("http://{}{}", closed_address(), API_PREFIX));
    TestServer::new(routes().with_state(state)).unwrap()
}

/// A local address nothing listens on.
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

/// Fails the test (on server drop) if any request reaches the upstream.
pub async fn expect_no_upstream_calls(upstream: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(upstream)
        .await;
}

pub fn upstream_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub fn bulbasaur() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "order": 1,
        "is_default": true,
        "abilities": [
            { "ability": { "name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/" }, "is_hidden": false, "slot": 1 }
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
            "back_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/1.png"
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } }
        ]
    })
}

pub fn pikachu() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": null,
        "sprites": { "front_default": null, "back_default": null },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "stats": []
    })
}

pub fn list_page(limit: usize, offset: usize) -> Value {
    let results: Vec<Value> = (offset + 1..=offset + limit)
        .map(|id| {
            json!({
                "name": format!("pokemon-{id}"),
                "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/")
            })
        })
        .collect();

    json!({
        "count": 1302,
        "next": format!("https://pokeapi.co/api/v2/pokemon?offset={}&limit={}", offset + limit, limit),
        "previous": null,
        "results": results
    })
}
