use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Ordered record store for products.
///
/// Insertion order is preserved and is the default listing order.
/// Mutations are visible to every later read. Index-based operations fail
/// with `ProductError::IndexOutOfRange` when the index is past the end.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Position of a product in the store
    async fn find_index_by_id(&self, id: &str) -> ProductResult<Option<usize>>;

    /// Append a product
    async fn insert(&self, product: Product) -> ProductResult<()>;

    /// Overwrite the product at `index`
    async fn replace_at(&self, index: usize, product: Product) -> ProductResult<()>;

    /// Remove and return the product at `index`
    async fn remove_at(&self, index: usize) -> ProductResult<Product>;
}
