//! Tests for `AppError` to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog_api::error::AppError;
use catalog_core::error::CoreError;
use http_body_util::BodyExt;

async fn into_parts(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = into_parts(AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 42 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = into_parts(AppError::Core(CoreError::Validation(
        "name: must not be blank".to_string(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: must not be blank");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) =
        into_parts(AppError::BadRequest("Category with id 9 not found".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Category with id 9 not found");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = into_parts(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_are_sanitized() {
    let (status, json) = into_parts(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
