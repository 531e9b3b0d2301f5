use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Store index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Could not generate a unique product id after {0} attempts")]
    IdExhausted(usize),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::Validation { message, details } => {
                AppError::Validation { message, details }
            }
            ProductError::IndexOutOfRange { .. } | ProductError::IdExhausted(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::ErrorKind;

    #[test]
    fn test_error_kinds() {
        let not_found: AppError = ProductError::NotFound("7".into()).into();
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.to_string(), "Product with id 7 not found");

        let out_of_range: AppError = ProductError::IndexOutOfRange { index: 5, len: 3 }.into();
        assert_eq!(out_of_range.kind(), ErrorKind::Unclassified);

        let exhausted: AppError = ProductError::IdExhausted(5).into();
        assert_eq!(exhausted.kind(), ErrorKind::Unclassified);

        let invalid: AppError = ProductError::Validation {
            message: "Price is required".into(),
            details: None,
        }
        .into();
        assert_eq!(invalid.kind(), ErrorKind::Validation);
    }
}
