//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{product, summary};
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /          -> list (optional ?q=)
/// POST   /          -> create
/// GET    /summary   -> summary
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/summary", get(summary::summary))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
}
