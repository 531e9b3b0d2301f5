//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<InMemoryProductRepository>,
}

impl AppState {
    /// State backed by a store holding the startup records
    pub fn seeded(config: Config) -> Self {
        Self {
            config,
            products: ProductService::new(InMemoryProductRepository::seeded()),
        }
    }
}
