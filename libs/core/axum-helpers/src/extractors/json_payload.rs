//! Lenient JSON body extractor feeding hand-rolled validation.

use crate::errors::AppError;
use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

/// Largest body [`parse_json_body`] buffers, same as axum's default limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Request body parsed as an untyped JSON value.
///
/// Unlike `axum::Json`, this extractor never rejects on content type or on a
/// field's shape, so validators downstream can report every problem at once:
/// - an empty (or whitespace-only) body parses as `{}`
/// - malformed JSON fails with [`AppError::InvalidJson`]
///
/// # Example
/// ```ignore
/// async fn create(JsonPayload(payload): JsonPayload) -> impl IntoResponse {
///     let name = payload.get("name");
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(payload) = req.extensions_mut().remove::<JsonPayload>() {
            return Ok(payload);
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        JsonPayload::parse(&bytes)
    }
}

impl JsonPayload {
    fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(Value::Object(Default::default())));
        }

        serde_json::from_slice(bytes)
            .map(JsonPayload)
            .map_err(|e| AppError::InvalidJson(e.to_string()))
    }
}

/// Body parsing as a pipeline stage.
///
/// Rejects malformed JSON before any inner layer (such as the API key
/// check) runs. The parsed value is stored in the request extensions, where
/// [`JsonPayload`] picks it up instead of reading the body again.
///
/// ```ignore
/// let route = post(create)
///     .route_layer(from_fn_with_state(api_key, api_key_auth))
///     .route_layer(from_fn(parse_json_body));
/// ```
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| AppError::validation(format!("Failed to read request body: {}", e)))?;

    parts.extensions.insert(JsonPayload::parse(&bytes)?);
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
