//! Route tables, one module per resource.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// All resource routes, mounted by the caller under `/api`.
///
/// ```text
/// /categories   -> category::router()
/// /products     -> product::router()
/// /dashboard    -> dashboard::router()
/// /auth         -> auth::router()
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/products", product::router())
        .nest("/dashboard", dashboard::router())
        .nest("/auth", auth::router())
}
