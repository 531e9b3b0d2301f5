use axum::{
    extract::{OriginalUri, Request},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use std::time::Instant;

/// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Logs every inbound request before it reaches any other stage.
///
/// The "received" event carries the timestamp, method and original path
/// (including the query string). A second event records status and latency
/// once the response is ready. Never fails the request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.to_string())
        .unwrap_or_else(|| request.uri().to_string());
    let started = Instant::now();

    tracing::info!(
        timestamp = %timestamp(),
        method = %method,
        path = %path,
        "Request received"
    );

    let response = next.run(request).await;

    tracing::debug!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
