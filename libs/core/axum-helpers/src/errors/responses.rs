//! Reusable OpenAPI response types for error documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Resource or route not found",
    content_type = "application/json",
    example = json!({
        "error": "NotFoundError",
        "message": "Product with id 42 not found",
        "statusCode": 404
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - payload failed validation",
    content_type = "application/json",
    example = json!({
        "error": "ValidationError",
        "message": "Name is required and must be a non-empty string, Price is required and must be a non-negative number",
        "statusCode": 400,
        "details": {
            "name": [{"code": "required", "message": "Name is required and must be a non-empty string", "params": {}}],
            "price": [{"code": "range", "message": "Price is required and must be a non-negative number", "params": {}}]
        }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Missing or invalid API key",
    content_type = "application/json",
    example = json!({
        "error": "AuthenticationError",
        "message": "API key is required",
        "statusCode": 401
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Error",
        "message": "Internal server error",
        "statusCode": 500
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
