//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the shared middleware pipeline and API docs
//! - The `/health` liveness endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//!
//! let routes = Router::new().merge(health_router(app_info!()));
//! let app = create_router::<ApiDoc>(routes, Environment::Production);
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
