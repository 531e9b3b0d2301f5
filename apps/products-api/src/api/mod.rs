//! API routes module

pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/api/products", products::router(state))
        .merge(root::router(state.config.app))
        .merge(health_router(state.config.app))
}
