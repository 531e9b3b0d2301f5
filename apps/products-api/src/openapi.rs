//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::root;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "In-memory product catalogue with API-key protected mutations",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(root::root),
    components(schemas(root::RootResponse, axum_helpers::ErrorResponse)),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Root", description = "Service metadata"),
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
