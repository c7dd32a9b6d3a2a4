//! Inventory summary and dashboard handlers.

use axum::extract::State;
use axum::Json;
use catalog_db::models::category::CategoryRef;
use catalog_db::models::summary::InventorySummary;
use catalog_db::repositories::{CategoryRepo, InventoryRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for `GET /dashboard`: the inventory totals plus every category.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: i64,
    pub total_items_in_stock: i64,
    pub total_inventory_value: Decimal,
    pub categories: Vec<CategoryRef>,
}

/// GET /api/products/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<InventorySummary>> {
    let summary = InventoryRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = InventoryRepo::summary(&state.pool).await?;
    let categories = CategoryRepo::list_refs(&state.pool).await?;

    Ok(Json(DashboardSummary {
        total_products: summary.total_products,
        total_items_in_stock: summary.total_items_in_stock,
        total_inventory_value: summary.total_inventory_value,
        categories,
    }))
}
