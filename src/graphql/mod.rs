//! GraphQL API module
//!
//! Declares the schema served at `/graphql`: catalog queries, product
//! mutations, and the signup/login/me authentication flow.
//!
//! # Example Queries
//!
//! ```graphql
//! # Filtered, sorted, paginated catalog listing
//! query {
//!   products(category: "audio", priceMin: 20, priceMax: 200,
//!            sortBy: "price", sortOrder: "desc", page: 1, pageSize: 10) {
//!     id
//!     name
//!     price
//!     inStock
//!   }
//! }
//!
//! # Single product
//! query {
//!   product(id: "7f3d…") { name brand }
//! }
//!
//! # Create a product
//! mutation {
//!   addProduct(name: "Headphones", description: "Over-ear",
//!              price: 59.9, category: "audio", brand: "Acme", inStock: 12) {
//!     id
//!   }
//! }
//!
//! # Authentication
//! mutation {
//!   signup(username: "alice", password: "hunter22") { id username role }
//! }
//! mutation {
//!   login(username: "alice", password: "hunter22") { token }
//! }
//! query {
//!   me { username role }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{build_schema, CatalogSchema};

use async_graphql::ErrorExtensions;
use uuid::Uuid;

use crate::errors::AppError;

/// Raw `Authorization` header value, forwarded verbatim into the
/// request context. Empty when the caller sent no header.
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse an opaque GraphQL ID into a store identifier.
pub(crate) fn parse_id(id: &async_graphql::ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str())
        .map_err(|_| AppError::validation("Invalid product id").extend())
}
