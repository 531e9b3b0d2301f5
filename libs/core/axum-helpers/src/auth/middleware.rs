use super::config::ApiKeyConfig;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret authentication for mutating routes.
///
/// An absent or empty `x-api-key` header fails with "API key is required";
/// a key that differs from the configured one fails with "Invalid API key".
/// The request passes through untouched otherwise.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, routing::post};
/// use axum_helpers::{ApiKeyConfig, api_key_auth};
///
/// let auth = middleware::from_fn_with_state(ApiKeyConfig::new("s3cret"), api_key_auth);
/// let route = post(create_handler).route_layer(auth);
/// ```
pub async fn api_key_auth(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Authentication("API key is required".to_string()))?;

    if !config.matches(provided) {
        tracing::debug!("Rejected request with a non-matching API key");
        return Err(AppError::Authentication("Invalid API key".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::post};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|| async { StatusCode::CREATED }).route_layer(middleware::from_fn_with_state(
                ApiKeyConfig::new("s3cret"),
                api_key_auth,
            )),
        )
    }

    async fn call(key: Option<&str>) -> (StatusCode, Option<ErrorResponse>) {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).ok())
    }

    #[tokio::test]
    async fn test_missing_key() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.unwrap().message, "API key is required");
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let (status, body) = call(Some("")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.unwrap().message, "API key is required");
    }

    #[tokio::test]
    async fn test_wrong_key() {
        let (status, body) = call(Some("guess")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.unwrap().message, "Invalid API key");
    }

    #[tokio::test]
    async fn test_correct_key_passes_through() {
        let (status, _) = call(Some("s3cret")).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
