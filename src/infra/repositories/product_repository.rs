//! Product repository - catalog reads and writes.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::product::{self, Entity as ProductEntity};
use crate::domain::{Product, ProductDraft, ProductFilter, SortField, SortOrder};
use crate::errors::AppResult;
use crate::types::PageParams;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List products matching the filter, sorted and paginated
    async fn find(&self, filter: &ProductFilter, page: &PageParams) -> AppResult<Vec<Product>>;

    /// Find product by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Persist a new product
    async fn create(&self, draft: ProductDraft) -> AppResult<Product>;

    /// Replace all fields of an existing product.
    ///
    /// Returns `None` when the id does not exist; never inserts.
    async fn replace(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>>;

    /// Remove a product, returning the removed record.
    ///
    /// Returns `None` when the id does not exist.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>>;
}

/// SeaORM-backed product store.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create a new store over the given connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find(&self, filter: &ProductFilter, page: &PageParams) -> AppResult<Vec<Product>> {
        let mut query = ProductEntity::find();

        if let Some(category) = &filter.category {
            query = query.filter(product::Column::Category.eq(category.clone()));
        }
        // Inclusive bounds; both combine into a single range
        if let Some(min) = filter.price_min {
            query = query.filter(product::Column::Price.gte(min));
        }
        if let Some(max) = filter.price_max {
            query = query.filter(product::Column::Price.lte(max));
        }

        if let Some(sort) = filter.sort {
            let column = match sort.field {
                SortField::Name => product::Column::Name,
                SortField::Price => product::Column::Price,
                SortField::Category => product::Column::Category,
                SortField::Brand => product::Column::Brand,
                SortField::InStock => product::Column::InStock,
            };
            query = match sort.order {
                SortOrder::Asc => query.order_by_asc(column),
                SortOrder::Desc => query.order_by_desc(column),
            };
        }

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let model = ProductEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let active_model = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            category: Set(draft.category),
            brand: Set(draft.brand),
            in_stock: Set(draft.in_stock),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Product::from(model))
    }

    async fn replace(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>> {
        let Some(existing) = ProductEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: product::ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.description = Set(draft.description);
        active.price = Set(draft.price);
        active.category = Set(draft.category);
        active.brand = Set(draft.brand);
        active.in_stock = Set(draft.in_stock);

        let model = active.update(&self.db).await?;
        Ok(Some(Product::from(model)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        let Some(existing) = ProductEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let removed = Product::from(existing.clone());
        existing.delete(&self.db).await?;
        Ok(Some(removed))
    }
}
