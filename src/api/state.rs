//! Application state shared by the HTTP handlers.
//!
//! Built once at startup and passed into the router; resolvers reach
//! the services through the schema's context data.

use std::sync::Arc;

use crate::config::Config;
use crate::graphql::{build_schema, CatalogSchema};
use crate::infra::Database;
use crate::services::Services;

/// Application state containing the executable schema and the database
/// handle used by the health endpoint.
#[derive(Clone)]
pub struct AppState {
    pub schema: CatalogSchema,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Arc::new(Services::from_connection(
            database.get_connection(),
            config,
        ));

        Self {
            schema: build_schema(services),
            database,
        }
    }
}
