//! # Axum Helpers
//!
//! Shared building blocks for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: static API key authentication for mutating routes
//! - **[`errors`]**: error taxonomy, JSON error bodies and the terminal error responder
//! - **[`extractors`]**: lenient JSON body extraction for accumulating validators
//! - **[`http`]**: request logging and security headers
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new().merge(health_router(app_info!()));
//!     let app = create_router::<ApiDoc>(routes, Environment::from_env());
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{API_KEY_HEADER, ApiKeyConfig, api_key_auth};

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::{log_requests, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorKind, ErrorResponse, error_responder, not_found};

// Re-export extractors
pub use extractors::{JsonPayload, parse_json_body};
