//! GraphQL mutation resolvers.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::types::{AuthPayload, Product, User};
use super::parse_id;
use crate::domain::ProductDraft;
use crate::services::Services;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a new product
    async fn add_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        price: f64,
        category: String,
        brand: String,
        in_stock: i32,
    ) -> Result<Product> {
        let services = ctx.data_unchecked::<Arc<Services>>();
        let draft = ProductDraft {
            name,
            description,
            price,
            category,
            brand,
            in_stock,
        };

        let product = services
            .products()
            .add_product(draft)
            .await
            .map_err(|e| e.extend())?;

        Ok(product.into())
    }

    /// Update an existing product, replacing all of its fields.
    ///
    /// Returns null when no product has the given id.
    #[allow(clippy::too_many_arguments)]
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        description: String,
        price: f64,
        category: String,
        brand: String,
        in_stock: i32,
    ) -> Result<Option<Product>> {
        let services = ctx.data_unchecked::<Arc<Services>>();
        let product_id = parse_id(&id)?;
        let draft = ProductDraft {
            name,
            description,
            price,
            category,
            brand,
            in_stock,
        };

        let updated = services
            .products()
            .update_product(product_id, draft)
            .await
            .map_err(|e| e.extend())?;

        Ok(updated.map(Product::from))
    }

    /// Delete a product, returning the removed record
    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<Product> {
        let services = ctx.data_unchecked::<Arc<Services>>();
        let product_id = parse_id(&id)?;

        let product = services
            .products()
            .delete_product(product_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(product.into())
    }

    /// Sign up a new user
    async fn signup(&self, ctx: &Context<'_>, username: String, password: String) -> Result<User> {
        let services = ctx.data_unchecked::<Arc<Services>>();

        let user = services
            .auth()
            .signup(username, password)
            .await
            .map_err(|e| e.extend())?;

        Ok(user.into())
    }

    /// Login and get a signed bearer token
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<AuthPayload> {
        let services = ctx.data_unchecked::<Arc<Services>>();

        let session = services
            .auth()
            .login(username, password)
            .await
            .map_err(|e| e.extend())?;

        Ok(session.into())
    }
}
