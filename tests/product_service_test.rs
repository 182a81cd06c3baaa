//! Product service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use catalog_api::domain::{Product, ProductDraft, ProductFilter, ProductSort, SortField, SortOrder};
use catalog_api::errors::AppError;
use catalog_api::infra::{
    MockProductRepository, MockUserRepository, ProductRepository, Repositories, UserRepository,
};
use catalog_api::services::{ProductManager, ProductService};
use catalog_api::types::PageParams;

fn sample_product(id: Uuid) -> Product {
    Product {
        id,
        name: "Headphones".to_string(),
        description: "Over-ear, closed back".to_string(),
        price: 59.9,
        category: "audio".to_string(),
        brand: "Acme".to_string(),
        in_stock: 12,
    }
}

fn sample_draft() -> ProductDraft {
    ProductDraft {
        name: "Headphones".to_string(),
        description: "Over-ear, closed back".to_string(),
        price: 59.9,
        category: "audio".to_string(),
        brand: "Acme".to_string(),
        in_stock: 12,
    }
}

/// Test facade handing out mocked repositories
struct TestRepositories {
    products: Arc<MockProductRepository>,
    users: Arc<MockUserRepository>,
}

impl TestRepositories {
    fn with_products(products: MockProductRepository) -> Self {
        Self {
            products: Arc::new(products),
            users: Arc::new(MockUserRepository::new()),
        }
    }
}

impl Repositories for TestRepositories {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }
}

fn service_with(repo: MockProductRepository) -> ProductManager<TestRepositories> {
    ProductManager::new(Arc::new(TestRepositories::with_products(repo)))
}

#[tokio::test]
async fn test_get_product_success() {
    let product_id = Uuid::new_v4();

    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id()
        .with(eq(product_id))
        .returning(|id| Ok(Some(sample_product(id))));

    let service = service_with(repo);
    let result = service.get_product(product_id).await;

    assert_eq!(result.unwrap().id, product_id);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = service_with(repo);
    let result = service.get_product(Uuid::new_v4()).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::NotFound(entity) if entity == "Product"
    ));
}

#[tokio::test]
async fn test_add_product_returns_created_record() {
    let mut repo = MockProductRepository::new();
    repo.expect_create()
        .withf(|draft| draft.name == "Headphones" && draft.in_stock == 12)
        .returning(|draft| {
            Ok(Product {
                id: Uuid::new_v4(),
                name: draft.name,
                description: draft.description,
                price: draft.price,
                category: draft.category,
                brand: draft.brand,
                in_stock: draft.in_stock,
            })
        });

    let service = service_with(repo);
    let created = service.add_product(sample_draft()).await.unwrap();

    assert_eq!(created.name, "Headphones");
    assert_eq!(created.price, 59.9);
}

#[tokio::test]
async fn test_update_nonexistent_product_returns_none() {
    let mut repo = MockProductRepository::new();
    repo.expect_replace().returning(|_, _| Ok(None));

    let service = service_with(repo);
    let result = service
        .update_product(Uuid::new_v4(), sample_draft())
        .await;

    // Unknown id is not an error and must not create a record
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_update_existing_product_returns_replaced_record() {
    let product_id = Uuid::new_v4();

    let mut repo = MockProductRepository::new();
    repo.expect_replace()
        .withf(move |id, draft| *id == product_id && draft.price == 59.9)
        .returning(|id, draft| {
            Ok(Some(Product {
                id,
                name: draft.name,
                description: draft.description,
                price: draft.price,
                category: draft.category,
                brand: draft.brand,
                in_stock: draft.in_stock,
            }))
        });

    let service = service_with(repo);
    let updated = service
        .update_product(product_id, sample_draft())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, product_id);
}

#[tokio::test]
async fn test_delete_product_returns_removed_record() {
    let product_id = Uuid::new_v4();

    let mut repo = MockProductRepository::new();
    repo.expect_delete()
        .with(eq(product_id))
        .returning(|id| Ok(Some(sample_product(id))));

    let service = service_with(repo);
    let removed = service.delete_product(product_id).await.unwrap();

    assert_eq!(removed.id, product_id);
}

#[tokio::test]
async fn test_delete_nonexistent_product_fails() {
    let mut repo = MockProductRepository::new();
    repo.expect_delete().returning(|_| Ok(None));

    let service = service_with(repo);
    let result = service.delete_product(Uuid::new_v4()).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::NotFound(entity) if entity == "Product"
    ));
}

#[tokio::test]
async fn test_list_forwards_filter_and_pagination() {
    let mut repo = MockProductRepository::new();
    repo.expect_find()
        .withf(|filter, page| {
            filter.category.as_deref() == Some("audio")
                && filter.price_min == Some(20.0)
                && filter.price_max == Some(200.0)
                && filter.sort
                    == Some(ProductSort {
                        field: SortField::Price,
                        order: SortOrder::Desc,
                    })
                && page.offset() == 5
                && page.limit() == 5
        })
        .returning(|_, _| Ok(vec![]));

    let service = service_with(repo);
    let filter = ProductFilter {
        category: Some("audio".to_string()),
        price_min: Some(20.0),
        price_max: Some(200.0),
        sort: Some(ProductSort {
            field: SortField::Price,
            order: SortOrder::Desc,
        }),
    };

    let result = service
        .list_products(filter, PageParams::new(Some(2), Some(5)))
        .await;

    assert!(result.unwrap().is_empty());
}
