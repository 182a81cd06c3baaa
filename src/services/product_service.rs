//! Product service - catalog use cases over the product repository.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Product, ProductDraft, ProductFilter};
use crate::errors::{AppResult, OptionExt};
use crate::infra::Repositories;
use crate::types::PageParams;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List products matching the filter, sorted and paginated
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageParams,
    ) -> AppResult<Vec<Product>>;

    /// Get a single product by id
    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    /// Create a new product
    async fn add_product(&self, draft: ProductDraft) -> AppResult<Product>;

    /// Replace all fields of an existing product.
    ///
    /// Returns `None` for an unknown id rather than failing.
    async fn update_product(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>>;

    /// Remove a product, returning the removed record
    async fn delete_product(&self, id: Uuid) -> AppResult<Product>;
}

/// Concrete implementation of ProductService over the persistence facade.
pub struct ProductManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> ProductManager<R> {
    /// Create new product service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> ProductService for ProductManager<R> {
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageParams,
    ) -> AppResult<Vec<Product>> {
        self.repos.products().find(&filter, &page).await
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.repos
            .products()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Product")
    }

    async fn add_product(&self, draft: ProductDraft) -> AppResult<Product> {
        self.repos.products().create(draft).await
    }

    async fn update_product(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>> {
        self.repos.products().replace(id, draft).await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<Product> {
        self.repos
            .products()
            .delete(id)
            .await?
            .ok_or_not_found("Product")
    }
}
