//! Handlers for the `/auth` resource (placeholder login and logout).

use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{issue_token, ADMIN_ROLE};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::validate_input;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Any non-blank username/password pair succeeds.
pub async fn login(AppJson(input): AppJson<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    validate_input(&input)?;

    tracing::info!(username = %input.username, "User logged in");

    Ok(Json(LoginResponse {
        token: issue_token(),
        username: input.username,
        role: ADMIN_ROLE,
    }))
}

/// POST /api/auth/logout
///
/// There is no session to end; always 204.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
