//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_not_blank, validate_price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::Category;

/// A product with its category resolved.
///
/// Built from [`ProductWithCategoryRow`]; there is no lazy loading, every
/// query that returns a `Product` joins `categories` explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub total_items_in_stock: i32,
    pub category: Option<Category>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row produced by `products LEFT JOIN categories`.
///
/// Category columns are prefixed `c_` and are all `NULL` when the product
/// has no category.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithCategoryRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub total_items_in_stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub c_id: Option<DbId>,
    pub c_name: Option<String>,
    pub c_created_at: Option<Timestamp>,
    pub c_updated_at: Option<Timestamp>,
}

impl From<ProductWithCategoryRow> for Product {
    fn from(row: ProductWithCategoryRow) -> Self {
        let category = match (row.c_id, row.c_name, row.c_created_at, row.c_updated_at) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(Category {
                id,
                name,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            total_items_in_stock: row.total_items_in_stock,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Request body for both `POST /products` and `PUT /products/{id}`.
///
/// On create, a missing `total_items_in_stock` defaults to 0. On update it
/// keeps the stored stock, and a missing `category_id` keeps the stored
/// category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveProduct {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub name: String,
    pub description: Option<String>,
    #[validate(required(message = "is required"), custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    #[validate(range(min = 0, message = "must be >= 0"))]
    pub total_items_in_stock: Option<i32>,
    pub category_id: Option<DbId>,
}
