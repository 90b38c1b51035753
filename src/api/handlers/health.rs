//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the gateway is serving requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// Makes no upstream call, so the result does not depend on PokeAPI being
/// reachable.
///
/// # Response
///
/// ```json
/// { "status": "healthy" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
