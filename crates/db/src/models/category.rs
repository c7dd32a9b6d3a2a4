//! Category entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Id + name projection used by the dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
}

/// DTO for inserting a category. Categories are seeded, never created over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}
