//! HTTP-level integration tests for signup, login, and Bearer token checks.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, create_user, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_returns_token_usable_for_api(pool: PgPool) {
    let body = json!({ "email": "new@test.com", "password": "long-enough" });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/signup",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["user"]["email"], "new@test.com");
    assert!(data["user"]["id"].is_i64());
    assert!(data["user"].get("password_hash").is_none());
    assert_eq!(data["expires_in"], 15 * 60);

    let token = data["access_token"].as_str().unwrap();
    let response = get_auth(common::build_test_app(pool), "/api/v1/decks", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_with_taken_email_conflicts(pool: PgPool) {
    create_user(&pool, "taken@test.com").await;

    let body = json!({ "email": "taken@test.com", "password": "long-enough" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_EXISTS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_rejects_short_password_and_bad_email(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/signup",
        json!({ "email": "short@test.com", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/signup",
        json!({ "email": "not-an-email", "password": "long-enough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success(pool: PgPool) {
    let (user_id, _) = create_user(&pool, "login@test.com").await;

    let body = json!({ "email": "login@test.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["user"]["id"], user_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_or_unknown_email_is_401(pool: PgPool) {
    create_user(&pool, "login@test.com").await;

    for body in [
        json!({ "email": "login@test.com", "password": "wrong-password" }),
        json!({ "email": "ghost@test.com", "password": TEST_PASSWORD }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    }
}

// ---------------------------------------------------------------------------
// Bearer token handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_401(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_401(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dashboard/stats",
        "not.a.jwt",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_bearer_scheme_is_401(pool: PgPool) {
    let (_, token) = create_user(&pool, "basic@test.com").await;

    let request = Request::builder()
        .uri("/api/v1/decks")
        .header("authorization", format!("Basic {token}"))
        .body(Body::empty())
        .unwrap();
    let response = common::build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
