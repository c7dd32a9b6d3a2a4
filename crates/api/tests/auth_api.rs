//! Integration tests for the placeholder `/api/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_empty, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_admin_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "a", "password": "b" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "a");
    assert_eq!(json["role"], "ADMIN");
    let token = json["token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_issues_a_fresh_token_each_time(pool: PgPool) {
    let body = json!({ "username": "a", "password": "b" });

    let app = common::build_test_app(pool.clone());
    let first = body_json(post_json(app, "/api/auth/login", body.clone()).await).await;
    let app = common::build_test_app(pool);
    let second = body_json(post_json(app, "/api/auth/login", body).await).await;

    assert_ne!(first["token"], second["token"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_blank_credentials_returns_400(pool: PgPool) {
    for body in [
        json!({ "username": "", "password": "b" }),
        json!({ "username": "a", "password": "   " }),
        json!({ "username": "a" }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/auth/login", body.clone()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_null_or_mistyped_fields_returns_json_400(pool: PgPool) {
    for body in [
        json!({ "username": null, "password": "b" }),
        json!({ "username": "a", "password": null }),
        json!({ "username": 5, "password": "b" }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/auth/login", body.clone()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "body: {body}");
        assert!(json.get("token").is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/auth/logout").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
