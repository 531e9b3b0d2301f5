use crate::errors::{error_responder, not_found};
use crate::http::{log_requests, security_headers};
use super::shutdown::shutdown_signal;
use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use std::io;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the configured address and serves `router` until Ctrl+C/SIGTERM.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps application routes in the shared request pipeline.
///
/// Stages, outermost first:
/// 1. `TraceLayer` span per request
/// 2. security headers
/// 3. request logging (timestamp, method, original path)
/// 4. error responder (development-only `stack`)
/// 5. routes, or the not-found fallback
///
/// Also mounts Swagger UI at `/swagger-ui` serving `T`'s document at
/// `/api-docs/openapi.json`. Requests whose path matches no route, or whose
/// method a matched path does not support, end in a `NotFoundError`.
///
/// Application routes match with or without a trailing slash
/// (`/api/products/` reaches `/api/products`). Swagger UI sits outside that
/// normalization because it redirects `/swagger-ui` to `/swagger-ui/`.
///
/// # Example
/// ```ignore
/// let routes = Router::new()
///     .route("/", get(root))
///     .nest("/api/products", products_router);
/// let app = create_router::<ApiDoc>(routes, Environment::from_env());
/// ```
pub fn create_router<T>(routes: Router, environment: Environment) -> Router
where
    T: OpenApi + 'static,
{
    let app = Router::new()
        .merge(routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .method_not_allowed_fallback(not_found)
        .fallback_service(NormalizePath::trim_trailing_slash(app))
        .layer(middleware::from_fn_with_state(environment, error_responder))
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}
