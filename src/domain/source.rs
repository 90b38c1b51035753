//! Upstream data source trait.

use async_trait::async_trait;
use serde_json::Value;

/// One outbound GET against the upstream service.
///
/// The path is kept as unencoded segments below the base URL. Each segment is
/// percent-encoded on its own when the URL is built, so a caller-supplied
/// token can never add segments or a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    /// Request for a top-level upstream collection such as `pokemon`.
    pub fn get(collection: &str) -> Self {
        Self {
            segments: vec![collection.to_string()],
            query: Vec::new(),
        }
    }

    /// Appends one path segment, e.g. an ID or a normalized name.
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    pub fn with_query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Unencoded `/a/b` form of the path, for logs.
    pub fn path(&self) -> String {
        self.segments.iter().fold(String::new(), |path, segment| path + "/" + segment)
    }
}

/// Classified outcome of a failed upstream call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamFailure {
    /// Connection refused, DNS failure or timeout.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream resource not found")]
    NotFound,

    /// Any non-404 error status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// A success status whose body is not valid JSON.
    #[error("malformed upstream body: {0}")]
    MalformedBody(String),
}

/// Interface to the external Pokemon data provider.
///
/// Implementations perform exactly one attempt per call: no retries, no caching.
///
/// # Implementations
///
/// - [`crate::infrastructure::pokeapi::PokeApiSource`] - HTTP client for PokeAPI
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Issues the request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns the [`UpstreamFailure`] classification of a failed call.
    async fn get_json(&self, request: UpstreamRequest) -> Result<Value, UpstreamFailure>;
}
