//! Products Domain
//!
//! In-memory product catalogue with filtered, paginated listing, statistics
//! and API-key protected mutations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, auth route layer, payload validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, id generation, single-writer mutations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Ordered record store (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::ApiKeyConfig;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::seeded());
//! let router = handlers::router(service, ApiKeyConfig::new("s3cret"));
//! # let _: axum::Router = router;
//! ```

pub mod error;
pub mod handlers;
pub mod ids;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod stats;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use memory::InMemoryProductRepository;
pub use models::{
    seed_products, Pagination, Product, ProductInput, ProductPage, ProductQuery, ProductStats,
};
pub use query::ListParams;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use validation::{validate_product_payload, ValidProduct};
