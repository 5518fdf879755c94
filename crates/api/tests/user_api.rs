//! Integration tests for the login upsert.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth, token_for};
use sqlx::PgPool;

fn profile() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "photoURL": "https://example.com/ada.png",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn first_login_creates_the_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = token_for("uid-1", "ada@example.com", Some("Ada"));

    let response = post_json_auth(app, "/api/v1/users", profile(), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["uid"], "uid-1");
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["photoURL"], "https://example.com/ada.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeat_login_returns_the_existing_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = token_for("uid-1", "ada@example.com", Some("Ada"));

    let response = post_json_auth(app.clone(), "/api/v1/users", profile(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;

    let response = post_json_auth(app, "/api/v1/users", profile(), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;

    assert_eq!(first["id"], second["id"]);
    // Login bookkeeping is still being recorded.
    assert!(second["lastLogin"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/users", profile()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
