pub mod codes;
pub mod responder;
pub mod responses;

pub use codes::ErrorKind;
pub use responder::{error_responder, not_found};

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_error::SpanTrace;
use utoipa::ToSchema;

/// Message sent to clients in place of an unclassified error's own text.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every error response.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "ValidationError",
///   "message": "Price is required and must be a non-negative number",
///   "statusCode": 400
/// }
/// ```
///
/// `stack` is only present when the service runs in development mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error kind name
    pub error: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// HTTP status code, repeated for clients that only see the body
    pub status_code: u16,
    /// Per-field validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Diagnostic trace (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Diagnostic data stashed in the response extensions of every error
/// response so the terminal [`error_responder`] can decide whether to expose
/// it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub body: ErrorResponse,
    pub stack: String,
}

/// Every failure a pipeline stage can hand to the error responder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure without per-field details.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation { .. } | AppError::InvalidJson(_) => ErrorKind::Validation,
            AppError::Authentication(_) => ErrorKind::Authentication,
            AppError::Internal(_) => ErrorKind::Unclassified,
        }
    }

    /// Message safe to hand to the client.
    fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unclassified => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    fn log(&self) {
        let kind = self.kind();
        if kind.is_server_error() {
            tracing::error!(error_kind = %kind, status = kind.status().as_u16(), "{:?}", self);
        } else {
            tracing::info!(error_kind = %kind, status = kind.status().as_u16(), "{}", self);
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let kind = self.kind();
        let details = match &self {
            AppError::Validation { details, .. } => details.clone(),
            _ => None,
        };
        let body = ErrorResponse {
            error: kind,
            message: self.public_message(),
            status_code: kind.status().as_u16(),
            details,
            stack: None,
        };
        let report = ErrorReport {
            body: body.clone(),
            stack: format!("{}: {}\n{}", kind, self, SpanTrace::capture()),
        };

        let mut response = (kind.status(), Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
