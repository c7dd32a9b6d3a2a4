//! Liveness report for load balancers and the front-end's status badge.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `UP` when the catalog database answers, `DOWN` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database_reachable: bool,
}

/// GET /health
///
/// Responds 503 when the database is unreachable so an orchestrator can
/// pull the instance out of rotation.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database_reachable = match catalog_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Catalog database unreachable");
            false
        }
    };

    let (code, status) = if database_reachable {
        (StatusCode::OK, "UP")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "DOWN")
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database_reachable,
        }),
    )
}
