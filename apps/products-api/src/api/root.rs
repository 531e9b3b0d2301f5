//! Endpoint directory served at `/`

use axum::{extract::State, routing::get, Json, Router};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Static description of the HTTP surface
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    /// Route pattern keyed by "METHOD path"
    pub endpoints: BTreeMap<String, String>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /api/products", "List products (category, inStock, search, page, limit)"),
    ("GET /api/products/stats", "Catalogue statistics"),
    ("GET /api/products/{id}", "Get a product"),
    ("POST /api/products", "Create a product (requires x-api-key)"),
    ("PUT /api/products/{id}", "Replace a product (requires x-api-key)"),
    ("DELETE /api/products/{id}", "Delete a product (requires x-api-key)"),
    ("GET /health", "Liveness check"),
    ("GET /swagger-ui", "Interactive API documentation"),
];

/// Endpoint directory
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Available endpoints", body = RootResponse)
    )
)]
pub async fn root(State(app): State<AppInfo>) -> Json<RootResponse> {
    Json(RootResponse {
        name: app.name.to_string(),
        version: app.version.to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(route, summary)| (route.to_string(), summary.to_string()))
            .collect(),
    })
}

pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(root)).with_state(app)
}
