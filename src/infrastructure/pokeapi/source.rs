//! reqwest-backed upstream source.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

use super::settings::UpstreamSettings;
use crate::domain::source::{PokemonSource, UpstreamFailure, UpstreamRequest};

/// PokeAPI client.
///
/// A fresh `reqwest::Client` is built for every call and owned by that call,
/// so its connections are released when the call returns, whichever way it
/// exits. Each call makes a single attempt bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct PokeApiSource {
    settings: UpstreamSettings,
}

impl PokeApiSource {
    pub fn new(settings: UpstreamSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &UpstreamSettings {
        &self.settings
    }

    fn client(&self) -> Result<reqwest::Client, UpstreamFailure> {
        reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .user_agent(self.settings.user_agent.as_str())
            .build()
            .map_err(|e| UpstreamFailure::Unreachable(format!("failed to build HTTP client: {e}")))
    }
}

/// Maps a non-success status to its failure kind.
fn classify_status(status: StatusCode) -> Option<UpstreamFailure> {
    if status == StatusCode::NOT_FOUND {
        Some(UpstreamFailure::NotFound)
    } else if status.is_client_error() || status.is_server_error() {
        Some(UpstreamFailure::Status(status.as_u16()))
    } else {
        None
    }
}

#[async_trait]
impl PokemonSource for PokeApiSource {
    async fn get_json(&self, request: UpstreamRequest) -> Result<Value, UpstreamFailure> {
        // A `.` or `..` segment would resolve outside its collection.
        if request.segments.iter().any(|segment| segment == "." || segment == "..") {
            debug!(path = %request.path(), "Dot segment cannot name a PokeAPI resource");
            return Err(UpstreamFailure::NotFound);
        }

        let url = self.settings.url_for(&request.segments).map_err(|e| {
            UpstreamFailure::Unreachable(format!("invalid PokeAPI base URL: {e}"))
        })?;
        let client = self.client()?;
        let started = Instant::now();

        let response = client
            .get(url.clone())
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, timeout = e.is_timeout(), "PokeAPI request failed");
                UpstreamFailure::Unreachable(e.to_string())
            })?;

        let status = response.status();
        debug!(
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "PokeAPI responded"
        );

        if let Some(failure) = classify_status(status) {
            if failure != UpstreamFailure::NotFound {
                warn!(%url, status = status.as_u16(), "PokeAPI returned an error status");
            }
            return Err(failure);
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "Failed to read PokeAPI response body");
            UpstreamFailure::Unreachable(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "PokeAPI returned a malformed body");
            UpstreamFailure::MalformedBody(e.to_string())
        })
    }
}
