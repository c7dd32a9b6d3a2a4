//! Repository for the `categories` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryRef, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read access (and seeding inserts) for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// Fails with a unique violation on `uq_categories_name` if the exact
    /// name already exists.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all categories ordered by name, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List id + name of every category, in the same order as [`Self::list`].
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<CategoryRef>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRef>("SELECT id, name FROM categories ORDER BY name ASC, id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find a category by name, ignoring case.
    ///
    /// Uniqueness is case-sensitive, so several rows may match; the oldest wins.
    pub async fn find_by_name_ignore_case(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories WHERE LOWER(name) = LOWER($1) ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a category with the given name exists, ignoring case.
    pub async fn exists_by_name_ignore_case(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE LOWER(name) = LOWER($1))")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
