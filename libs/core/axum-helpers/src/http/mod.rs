//! HTTP middleware shared by every router.
//!
//! - Request logging (timestamp, method, original path)
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{log_requests, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(log_requests))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod logging;
pub mod security;

pub use logging::log_requests;
pub use security::security_headers;
