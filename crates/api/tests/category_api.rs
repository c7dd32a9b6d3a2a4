//! Integration tests for the `/api/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_category};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_sorted_by_name(pool: PgPool) {
    seed_category(&pool, "Toys").await;
    seed_category(&pool, "Books").await;
    seed_category(&pool, "Food").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Books", "Food", "Toys"]);

    let first = &json[0];
    assert!(first["id"].is_i64());
    assert!(first["createdAt"].is_string());
    assert!(first["updatedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_category_by_id(pool: PgPool) {
    let id = seed_category(&pool, "Electronics").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Electronics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Category with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_category_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
