//! API key authentication.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, api_key_auth};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//! let protected = post(handler)
//!     .route_layer(axum::middleware::from_fn_with_state(config, api_key_auth));
//! ```

pub mod config;
pub mod middleware;

pub use config::{ApiKeyConfig, DEVELOPMENT_API_KEY};
pub use middleware::{API_KEY_HEADER, api_key_auth};
