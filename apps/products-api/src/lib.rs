//! Products API - REST server
//!
//! ## Modules
//!
//! - `config`: environment-driven configuration
//! - `state`: shared application state (config + product service)
//! - `api`: root directory, health and product routes
//! - `openapi`: combined OpenAPI document

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;

pub use config::Config;
pub use state::AppState;

/// Full application router: routes wrapped in the shared request pipeline
pub fn app(state: &AppState) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state), state.config.environment)
}
