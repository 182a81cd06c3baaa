//! Service container - centralized service construction and access.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductManager, ProductService};
use crate::config::Config;
use crate::infra::Persistence;

/// Holds one shared instance of every application service.
///
/// The GraphQL schema carries this container in its context so each
/// resolver reaches its service through a single handle.
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create a container from already-built services (used by tests)
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
        }
    }

    /// Wire all services from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let repos = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(repos.clone(), config));
        let product_service = Arc::new(ProductManager::new(repos));

        Self {
            auth_service,
            product_service,
        }
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get product service
    pub fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
