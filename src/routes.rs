//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`     - Liveness check, never calls PokeAPI
//! - `GET /pokemon/*`  - PokeAPI-backed lookups (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/health/` and
//!   `/health` are the same route

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes without state or middleware, for composing in tests.
pub fn routes() -> Router<AppState> {
    api::routes::pokemon_routes().route("/health", get(health_handler))
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = routes().with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
