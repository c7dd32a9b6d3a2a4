//! Handlers for the `/products` resource.
//!
//! Every product in a response carries its category (or `null`).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::search::normalize_search_term;
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, SaveProduct};
use catalog_db::repositories::{CategoryRepo, ProductRepo};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::validate_input;
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    /// Case-insensitive name substring. Blank means no filter.
    pub q: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// Reject a `category_id` that does not resolve to an existing category.
async fn ensure_category_exists(pool: &PgPool, category_id: Option<DbId>) -> AppResult<()> {
    if let Some(category_id) = category_id {
        if !CategoryRepo::exists(pool, category_id).await? {
            return Err(AppError::BadRequest(format!(
                "Category with id {category_id} not found"
            )));
        }
    }
    Ok(())
}

/// GET /api/products[?q=term]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = match normalize_search_term(params.q.as_deref()) {
        Some(term) => ProductRepo::search_with_category(&state.pool, term).await?,
        None => ProductRepo::list_with_category(&state.pool).await?,
    };
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id_with_category(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// POST /api/products
///
/// Validates the body, resolves the optional category, and returns 201 with
/// the stored product.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveProduct>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, category_id = ?input.category_id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
///
/// Replaces name, description, price and image URL. Stock and category are
/// only replaced when supplied.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SaveProduct>,
) -> AppResult<Json<Product>> {
    validate_input(&input)?;

    if !ProductRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    ensure_category_exists(&state.pool, input.category_id).await?;

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
