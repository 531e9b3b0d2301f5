//! Terminal stage of the request pipeline.

use axum::{
    Json,
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::Environment;

use super::{AppError, ErrorReport};

/// Final say over error responses.
///
/// Every [`AppError`] renders its production body on its own; this layer
/// strips the attached [`ErrorReport`] and, in development, re-renders the
/// body with the diagnostic `stack` included.
///
/// Install it as the innermost router-wide layer:
///
/// ```ignore
/// router.layer(axum::middleware::from_fn_with_state(environment, error_responder))
/// ```
pub async fn error_responder(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };
    if !environment.is_development() {
        return response;
    }

    let status = response.status();
    let mut body = report.body;
    body.stack = Some(report.stack);
    (status, Json(body)).into_response()
}

/// Fallback for requests no route matches.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri))
}
