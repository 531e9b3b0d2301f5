//! Create/update payload validation.
//!
//! Every rule runs on every request; failures accumulate into one
//! `ValidationError` instead of stopping at the first problem.

use axum::extract::{FromRequest, Request};
use axum_helpers::{AppError, JsonPayload};
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::error::ProductError;
use crate::models::ProductInput;

pub const NAME_MESSAGE: &str = "Name is required and must be a non-empty string";
pub const DESCRIPTION_MESSAGE: &str = "Description is required and must be a non-empty string";
pub const PRICE_MESSAGE: &str = "Price is required and must be a non-negative number";
pub const CATEGORY_MESSAGE: &str = "Category is required and must be a non-empty string";
pub const IN_STOCK_MESSAGE: &str = "inStock is required and must be a boolean";

/// Ordered list of rule failures: (field, code, message).
#[derive(Debug, Default)]
struct Failures(Vec<(&'static str, &'static str, &'static str)>);

impl Failures {
    fn push(&mut self, field: &'static str, code: &'static str, message: &'static str) {
        self.0.push((field, code, message));
    }

    fn into_error(self) -> ProductError {
        let message = self
            .0
            .iter()
            .map(|(_, _, message)| *message)
            .collect::<Vec<_>>()
            .join(", ");

        let mut errors = ValidationErrors::new();
        for (field, code, text) in self.0 {
            errors.add(
                field,
                ValidationError::new(code).with_message(Cow::Borrowed(text)),
            );
        }

        ProductError::Validation {
            message,
            details: serde_json::to_value(&errors).ok(),
        }
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
    message: &'static str,
    failures: &mut Failures,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(Value::String(_)) => {
            failures.push(field, "blank", message);
            None
        }
        Some(_) => {
            failures.push(field, "type", message);
            None
        }
        None => {
            failures.push(field, "required", message);
            None
        }
    }
}

/// Check `payload` against the product rules and return the trimmed input.
///
/// - `name`, `description`, `category`: strings, non-empty after trimming
/// - `price`: number, `>= 0`
/// - `inStock`: boolean
///
/// A payload that is not a JSON object fails every rule.
pub fn validate_product_payload(payload: &Value) -> Result<ProductInput, ProductError> {
    let empty = Map::new();
    let object = payload.as_object().unwrap_or(&empty);
    let mut failures = Failures::default();

    let name = required_text(object, "name", NAME_MESSAGE, &mut failures);
    let description = required_text(object, "description", DESCRIPTION_MESSAGE, &mut failures);

    let price = match object.get("price") {
        Some(value) => match value.as_f64() {
            Some(price) if price >= 0.0 => Some(price),
            Some(_) => {
                failures.push("price", "range", PRICE_MESSAGE);
                None
            }
            None => {
                failures.push("price", "type", PRICE_MESSAGE);
                None
            }
        },
        None => {
            failures.push("price", "required", PRICE_MESSAGE);
            None
        }
    };

    let category = required_text(object, "category", CATEGORY_MESSAGE, &mut failures);

    let in_stock = match object.get("inStock") {
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            failures.push("inStock", "type", IN_STOCK_MESSAGE);
            None
        }
        None => {
            failures.push("inStock", "required", IN_STOCK_MESSAGE);
            None
        }
    };

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock)) => {
            Ok(ProductInput {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(failures.into_error()),
    }
}

/// Extractor for create/update bodies: takes the JSON payload (already
/// parsed when `parse_json_body` ran as a route layer), then runs
/// [`validate_product_payload`]. Extractors run after every route layer, so
/// authentication is checked first.
#[derive(Debug, Clone)]
pub struct ValidProduct(pub ProductInput);

impl<S> FromRequest<S> for ValidProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonPayload(payload) = JsonPayload::from_request(req, state).await?;
        validate_product_payload(&payload)
            .map(ValidProduct)
            .map_err(AppError::from)
    }
}
