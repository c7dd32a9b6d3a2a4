//! Inventory aggregates over the `products` table.

use catalog_core::money::to_money;
use sqlx::PgPool;

use crate::models::summary::InventorySummary;

/// Read-only aggregate queries. Depends on `products` only.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Count products and sum stock and stock value in a single scan.
    ///
    /// Sums are computed in NUMERIC so the value is exact; an empty table
    /// yields `0`, `0` and `0.00`.
    pub async fn summary(pool: &PgPool) -> Result<InventorySummary, sqlx::Error> {
        let mut summary = sqlx::query_as::<_, InventorySummary>(
            "SELECT COUNT(*) AS total_products, \
                    COALESCE(SUM(total_items_in_stock), 0)::BIGINT AS total_items_in_stock, \
                    COALESCE(SUM(price * total_items_in_stock), 0)::NUMERIC AS total_inventory_value \
             FROM products",
        )
        .fetch_one(pool)
        .await?;

        summary.total_inventory_value = to_money(summary.total_inventory_value);
        Ok(summary)
    }
}
