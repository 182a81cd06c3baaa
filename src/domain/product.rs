//! Product domain entity and catalog query types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub in_stock: i32,
}

/// Full field set for creating a product or replacing an existing one.
///
/// Updates are full replaces, so the same shape serves both operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub in_stock: i32,
}

/// Catalog listing filter.
///
/// Price bounds are inclusive and combine into a single range when both
/// are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: Option<ProductSort>,
}

/// Requested ordering for a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Sortable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Category,
    Brand,
    InStock,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            "brand" => Ok(SortField::Brand),
            "inStock" => Ok(SortField::InStock),
            other => Err(AppError::validation(format!(
                "Cannot sort by unknown field '{}'",
                other
            ))),
        }
    }
}

/// Sort direction, ascending unless "desc" is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than "desc" sorts ascending.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}
