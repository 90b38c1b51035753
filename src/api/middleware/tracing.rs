//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying method, URI and HTTP version;
/// the response is logged with its status and latency in milliseconds.
///
/// Error responses from handlers are always `400`, so they are logged as
/// ordinary responses; the failure detail itself is logged by
/// [`crate::error::AppError`].
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/pokemon/id/25 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/pokemon/id/25 version=HTTP/1.1}: finished processing request latency=143 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
