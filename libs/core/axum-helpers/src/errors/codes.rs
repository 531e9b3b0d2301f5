//! Closed set of error kinds surfaced to API clients.
//!
//! Each kind carries the name written into the `error` field of the response
//! body and the HTTP status it maps to.
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorKind;
//!
//! let kind = ErrorKind::Validation;
//! assert_eq!(kind.name(), "ValidationError");
//! assert_eq!(kind.status(), StatusCode::BAD_REQUEST);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorKind {
    /// Referenced entity or route does not exist (404)
    #[serde(rename = "NotFoundError")]
    NotFound,

    /// Malformed create/update payload (400)
    #[serde(rename = "ValidationError")]
    Validation,

    /// Missing or incorrect API key (401)
    #[serde(rename = "AuthenticationError")]
    Authentication,

    /// Anything not classified above (500)
    #[serde(rename = "Error")]
    Unclassified,
}

impl ErrorKind {
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::Unclassified => "Error",
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
