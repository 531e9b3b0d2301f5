//! HTTP handlers for Products API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    api_key_auth,
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
        ValidationErrorResponse,
    },
    parse_json_body, ApiKeyConfig,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Pagination, Product, ProductInput, ProductPage, ProductQuery, ProductStats};
use crate::query::ListParams;
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::ValidProduct;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        product_stats,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, ProductPage, Pagination, ProductStats),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// Reads are public. Mutating routes run body parsing, then the API key
/// check, then payload validation in the handler's extractor. Route layers
/// added later wrap the earlier ones, so `parse_json_body` goes last.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    api_key: ApiKeyConfig,
) -> Router {
    let shared_service = Arc::new(service);
    let auth = middleware::from_fn_with_state(api_key, api_key_auth);
    let body = middleware::from_fn(parse_json_body);

    Router::new()
        .route(
            "/",
            post(create_product)
                .route_layer(auth.clone())
                .route_layer(body.clone())
                .get(list_products),
        )
        .route("/stats", get(product_stats))
        .route(
            "/{id}",
            put(update_product)
                .delete(delete_product)
                .route_layer(auth)
                .route_layer(body)
                .get(get_product),
        )
        .with_state(shared_service)
}

/// List products with optional filters, search and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ProductPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ProductResult<Json<ProductPage>> {
    let query: ProductQuery = pairs.into_iter().collect();
    let page = service.list_products(ListParams::from(query)).await?;
    Ok(Json(page))
}

/// Aggregate statistics over every stored product
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Store statistics", body = ProductStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductStats>> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    params(
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidProduct(input): ValidProduct,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace every field of a product except its ID
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("x-api-key" = String, Header, description = "API key")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidProduct(input): ValidProduct,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
