//! Handlers for the read-only `/categories` resource.

use axum::extract::State;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::category::Category;
use catalog_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /api/categories
///
/// All categories sorted by name ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}
