//! GraphQL schema construction.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::services::Services;

/// The full GraphQL schema type for the catalog API
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the service container in its context.
pub fn build_schema(services: Arc<Services>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
