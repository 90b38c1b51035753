//! Application error kinds and their single outward representation.
//!
//! Every failure a handler can produce is an [`AppError`]. The conversion to an
//! HTTP response lives in one place ([`AppError::into_envelope`] plus the
//! [`IntoResponse`] impl) and collapses all kinds to the same status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::contract::Violations;
use crate::domain::source::UpstreamFailure;

/// Status code used for every error response.
pub const ERROR_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Detail reported when an upstream payload fails its shape contract.
pub const SHAPE_MISMATCH_DETAIL: &str = "Invalid Pokemon data received from PokeAPI";

/// Uniform body of every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub detail: String,

    /// Field-level violations, present only for shape mismatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Violations>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A caller-supplied parameter failed a validation rule.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The upstream service reported that the resource does not exist.
    #[error("{message}")]
    NotFound { message: String },

    #[error("Failed to connect to PokeAPI")]
    UpstreamUnreachable,

    /// Non-404 error status or an unparseable body.
    #[error("Failed to fetch Pokemon data")]
    UpstreamError,

    #[error("Invalid Pokemon data received from PokeAPI")]
    ShapeMismatch { violations: Violations },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Generic not-found error before an operation attaches its own message.
    pub fn resource_not_found() -> Self {
        Self::not_found("Resource not found")
    }

    /// Returns `true` for failures caused by the upstream service rather than the caller.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::InvalidInput { .. })
    }

    /// Builds the outward envelope, discarding the error kind.
    pub fn into_envelope(self) -> ErrorEnvelope {
        let detail = self.to_string();
        let errors = match self {
            Self::ShapeMismatch { violations } => Some(violations),
            _ => None,
        };

        ErrorEnvelope { detail, errors }
    }
}

impl From<UpstreamFailure> for AppError {
    fn from(failure: UpstreamFailure) -> Self {
        match failure {
            UpstreamFailure::Unreachable(_) => Self::UpstreamUnreachable,
            UpstreamFailure::NotFound => Self::resource_not_found(),
            UpstreamFailure::Status(_) | UpstreamFailure::MalformedBody(_) => Self::UpstreamError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_upstream() {
            tracing::warn!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request input");
        }

        (ERROR_STATUS, Json(self.into_envelope())).into_response()
    }
}
