//! Route definitions for the dashboard aggregate.

use axum::routing::get;
use axum::Router;

use crate::handlers::summary;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /   -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(summary::dashboard))
}
