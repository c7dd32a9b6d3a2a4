//! Route definitions for the liveness endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Routes merged at the root, outside the API prefix.
///
/// ```text
/// GET /health  -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
