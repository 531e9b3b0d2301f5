//! Process-lifetime, in-memory product store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, seed_products};
use crate::repository::ProductRepository;

/// `Vec`-backed store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Store holding the three startup records
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_index_by_id(&self, id: &str) -> ProductResult<Option<usize>> {
        let products = self.products.read().await;
        Ok(products.iter().position(|p| p.id == id))
    }

    async fn insert(&self, product: Product) -> ProductResult<()> {
        self.products.write().await.push(product);
        Ok(())
    }

    async fn replace_at(&self, index: usize, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let len = products.len();
        let slot = products
            .get_mut(index)
            .ok_or(ProductError::IndexOutOfRange { index, len })?;
        *slot = product;
        Ok(())
    }

    async fn remove_at(&self, index: usize) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        if index >= products.len() {
            return Err(ProductError::IndexOutOfRange {
                index,
                len: products.len(),
            });
        }
        Ok(products.remove(index))
    }
}
