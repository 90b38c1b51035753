//! DTOs for health check endpoint.

use serde::Serialize;

/// Status reported while the process is serving requests.
pub const HEALTHY: &str = "healthy";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: HEALTHY }
    }
}
