//! Persistence facade - centralized repository access.
//!
//! Hands out shared repository handles to the service layer. Each
//! operation in this system is a single store call, so there is no
//! transaction coordination behind this facade.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

/// Repository access trait for dependency injection.
pub trait Repositories: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;
}

/// Concrete repository set over a single database connection.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    product_repo: Arc<ProductStore>,
}

impl Persistence {
    /// Create the repository set from a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db)),
        }
    }
}

impl Repositories for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }
}
