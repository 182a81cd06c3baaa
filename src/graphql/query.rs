//! GraphQL query resolvers.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::types::{Product, User};
use super::{parse_id, AuthToken};
use crate::domain::{ProductFilter, ProductSort, SortOrder};
use crate::services::Services;
use crate::types::PageParams;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List of all products with optional filters and pagination
    #[allow(clippy::too_many_arguments)]
    async fn products(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Exact category match")] category: Option<String>,
        #[graphql(desc = "Inclusive lower price bound")] price_min: Option<f64>,
        #[graphql(desc = "Inclusive upper price bound")] price_max: Option<f64>,
        #[graphql(desc = "Field to sort by: name, price, category, brand, inStock")]
        sort_by: Option<String>,
        #[graphql(desc = "asc or desc, ascending by default")] sort_order: Option<String>,
        #[graphql(desc = "1-based page number")] page: Option<i32>,
        page_size: Option<i32>,
    ) -> Result<Vec<Product>> {
        let services = ctx.data_unchecked::<Arc<Services>>();

        let sort = match sort_by {
            Some(field) => Some(ProductSort {
                field: field.parse().map_err(|e: crate::errors::AppError| e.extend())?,
                order: SortOrder::parse(sort_order.as_deref()),
            }),
            None => None,
        };
        let filter = ProductFilter {
            category,
            price_min,
            price_max,
            sort,
        };

        let products = services
            .products()
            .list_products(filter, PageParams::new(page, page_size))
            .await
            .map_err(|e| e.extend())?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    /// Get a single product by ID
    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<Product> {
        let services = ctx.data_unchecked::<Arc<Services>>();
        let product_id = parse_id(&id)?;

        let product = services
            .products()
            .get_product(product_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(product.into())
    }

    /// Get the authenticated user's profile
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let services = ctx.data_unchecked::<Arc<Services>>();
        let token = ctx
            .data_opt::<AuthToken>()
            .map(AuthToken::as_str)
            .unwrap_or_default();

        let user = services
            .auth()
            .current_user(token)
            .await
            .map_err(|e| e.extend())?;

        Ok(user.into())
    }
}
