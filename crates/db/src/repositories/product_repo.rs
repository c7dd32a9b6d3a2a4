//! Repository for the `products` table.
//!
//! Every read returns [`Product`] with its category joined in the same
//! statement. Writes use a data-modifying CTE so the joined row comes back
//! in one round trip.

use catalog_core::search::escape_like;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductWithCategoryRow, SaveProduct};

/// Select list for `products p LEFT JOIN categories c`.
const JOINED_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.image_url, \
     p.total_items_in_stock, p.created_at, p.updated_at, \
     c.id AS c_id, c.name AS c_name, c.created_at AS c_created_at, c.updated_at AS c_updated_at";

/// Provides CRUD and search operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products with their category, ordered by id.
    pub async fn list_with_category(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             ORDER BY p.id ASC"
        );
        let rows = sqlx::query_as::<_, ProductWithCategoryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// List products whose name contains `term` (case-insensitive), ordered by id.
    ///
    /// `term` is matched literally: LIKE wildcards in it are escaped.
    pub async fn search_with_category(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE p.name ILIKE '%' || $1 || '%' \
             ORDER BY p.id ASC"
        );
        let rows = sqlx::query_as::<_, ProductWithCategoryRow>(&query)
            .bind(escape_like(term))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Find a product with its category by product ID.
    pub async fn find_by_id_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProductWithCategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// Check whether a product with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new product, returning it with its category.
    ///
    /// A missing `total_items_in_stock` is stored as 0. The caller is
    /// expected to have validated `input` and resolved `category_id`.
    pub async fn create(pool: &PgPool, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "WITH p AS ( \
                 INSERT INTO products \
                     (name, description, price, image_url, total_items_in_stock, category_id) \
                 VALUES ($1, $2, $3, $4, COALESCE($5, 0), $6) \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM p \
             LEFT JOIN categories c ON c.id = p.category_id"
        );
        let row = sqlx::query_as::<_, ProductWithCategoryRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(input.total_items_in_stock)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Replace a product's mutable fields.
    ///
    /// `name`, `description`, `price` and `image_url` are always overwritten.
    /// `total_items_in_stock` and `category_id` keep their stored values when
    /// `None`. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "WITH p AS ( \
                 UPDATE products SET \
                     name = $2, \
                     description = $3, \
                     price = $4, \
                     image_url = $5, \
                     total_items_in_stock = COALESCE($6, total_items_in_stock), \
                     category_id = COALESCE($7, category_id) \
                 WHERE id = $1 \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM p \
             LEFT JOIN categories c ON c.id = p.category_id"
        );
        let row = sqlx::query_as::<_, ProductWithCategoryRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(input.total_items_in_stock)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
