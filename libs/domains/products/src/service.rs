//! Product Service - Business logic layer

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::models::{Product, ProductInput, ProductPage, ProductStats};
use crate::query::ListParams;
use crate::repository::ProductRepository;

/// Fresh ids are retried this many times before giving up on a collision.
const MAX_ID_ATTEMPTS: usize = 5;

/// Product service providing the CRUD operations behind the HTTP handlers.
///
/// Mutations are serialized through a single writer lock so a lookup and the
/// write that depends on it never interleave with another mutation.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
    writer: Arc<Mutex<()>>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with random UUID ids
    pub fn new(repository: R) -> Self {
        Self::with_id_generator(repository, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(repository: R, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository: Arc::new(repository),
            ids,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// List products with filters and pagination
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ListParams) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        Ok(params.apply(products))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product under a freshly generated id
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let _guard = self.writer.lock().await;

        let id = self.fresh_id().await?;
        let product = Product::new(id, input);
        self.repository.insert(product.clone()).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Replace every field of an existing product except its id
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let _guard = self.writer.lock().await;

        let index = self.index_of(id).await?;
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let updated = existing.replace_with(input);
        self.repository.replace_at(index, updated.clone()).await?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let _guard = self.writer.lock().await;

        let index = self.index_of(id).await?;
        self.repository.remove_at(index).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Aggregate statistics over the whole store
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ProductResult<ProductStats> {
        let products = self.repository.list().await?;
        Ok(ProductStats::from_products(&products))
    }

    async fn index_of(&self, id: &str) -> ProductResult<usize> {
        self.repository
            .find_index_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn fresh_id(&self) -> ProductResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.repository.find_by_id(&id).await?.is_none() {
                return Ok(id);
            }
            tracing::warn!(product_id = %id, "Generated id already in use, retrying");
        }
        Err(ProductError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ids: Arc::clone(&self.ids),
            writer: Arc::clone(&self.writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::memory::InMemoryProductRepository;
    use crate::models::seed_products;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "A thing".to_string(),
            price: 5.0,
            category: "Misc".to_string(),
            in_stock: true,
        }
    }

    fn seeded_service() -> ProductService<InMemoryProductRepository> {
        ProductService::new(InMemoryProductRepository::seeded())
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "42")
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product("42").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(id) if id == "42"));
    }

    #[tokio::test]
    async fn test_create_appends_with_fresh_id() {
        let service = seeded_service();
        let created = service.create_product(input("  Widget ")).await.unwrap();

        assert_eq!(created.name, "Widget");
        assert!(seed_products().iter().all(|p| p.id != created.id));

        let fetched = service.get_product(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let page = service.list_products(ListParams::default()).await.unwrap();
        assert_eq!(page.products.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_create_skips_colliding_ids() {
        // Counter starts at "2", which the seed data already uses.
        let service = ProductService::with_id_generator(
            InMemoryProductRepository::seeded(),
            Arc::new(SequentialIdGenerator::starting_at(2)),
        );

        let created = service.create_product(input("Widget")).await.unwrap();
        assert_eq!(created.id, "4");
    }

    #[tokio::test]
    async fn test_create_gives_up_after_repeated_collisions() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .times(MAX_ID_ATTEMPTS)
            .returning(|_| Ok(Some(seed_products().remove(0))));
        repo.expect_insert().never();

        let service = ProductService::new(repo);
        let err = service.create_product(input("Widget")).await.unwrap_err();
        assert!(matches!(err, ProductError::IdExhausted(MAX_ID_ATTEMPTS)));
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let service = seeded_service();
        let updated = service.update_product("2", input("Tea Mug")).await.unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Tea Mug");
        assert_eq!(updated.category, "Misc");
        assert_eq!(service.get_product("2").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_index_by_id().returning(|_| Ok(None));
        repo.expect_replace_at().never();

        let service = ProductService::new(repo);
        let err = service.update_product("9", input("x")).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_uses_found_index() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_index_by_id()
            .withf(|id| id == "3")
            .returning(|_| Ok(Some(2)));
        repo.expect_remove_at()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(seed_products().remove(2)));

        let service = ProductService::new(repo);
        service.delete_product("3").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = seeded_service();
        service.delete_product("1").await.unwrap();
        let err = service.delete_product("1").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stats_ignore_nothing() {
        let service = seeded_service();
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.out_of_stock, 1);
    }
}
