//! GraphQL object types exposed by the schema.

use async_graphql::{SimpleObject, ID};

use crate::domain;
use crate::services::AuthSession;

/// A catalog product.
#[derive(Debug, SimpleObject)]
pub struct Product {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub in_stock: i32,
}

impl From<domain::Product> for Product {
    fn from(product: domain::Product) -> Self {
        Self {
            id: ID(product.id.to_string()),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            brand: product.brand,
            in_stock: product.in_stock,
        }
    }
}

/// A registered account. The password hash never leaves the server.
#[derive(Debug, SimpleObject)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub role: String,
}

impl From<domain::User> for User {
    fn from(user: domain::User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            username: user.username,
            role: user.role.to_string(),
        }
    }
}

/// Login result: the account fields plus a bearer token.
#[derive(Debug, SimpleObject)]
pub struct AuthPayload {
    pub id: ID,
    pub username: String,
    pub role: String,
    pub token: String,
}

impl From<AuthSession> for AuthPayload {
    fn from(session: AuthSession) -> Self {
        Self {
            id: ID(session.user.id.to_string()),
            username: session.user.username,
            role: session.user.role.to_string(),
            token: session.token,
        }
    }
}
