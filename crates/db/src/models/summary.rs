//! Inventory aggregate model.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Totals over every row of `products`, computed in one aggregate query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: i64,
    pub total_items_in_stock: i64,
    /// Exact sum of `price * total_items_in_stock`, always two fractional digits.
    pub total_inventory_value: Decimal,
}
