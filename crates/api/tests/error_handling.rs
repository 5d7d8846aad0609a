//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server is
//! involved. Only the unique-violation case touches the database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cardify_api::error::AppError;
use cardify_core::error::CoreError;
use cardify_db::models::user::CreateUser;
use cardify_db::repositories::UserRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Deck",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Deck with id 42 not found");
}

#[tokio::test]
async fn validation_failed_returns_400() {
    let err = AppError::Core(CoreError::ValidationFailed("At least one card is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(json["error"], "At least one card is required");
}

#[tokio::test]
async fn already_exists_returns_409() {
    let err = AppError::Core(CoreError::AlreadyExists("Email is already registered".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_EXISTS");
    assert_eq!(json["error"], "Email is already registered");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn access_denied_returns_403() {
    let err = AppError::Core(CoreError::AccessDenied("You do not have access to this deck".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "ACCESS_DENIED");
    assert_eq!(json["error"], "You do not have access to this deck");
}

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Internal("Progress references missing card 7".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_is_an_internal_error() {
    // Repositories return `Option` for lookups, so a stray RowNotFound is a bug.
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn pool_errors_are_sanitized() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_returns_409(pool: PgPool) {
    let input = CreateUser {
        email: "twice@test.com".into(),
        password_hash: "hash".into(),
    };
    UserRepo::create(&pool, &input).await.unwrap();
    let err = UserRepo::create(&pool, &input).await.unwrap_err();

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_EXISTS");
    assert!(json["error"].as_str().unwrap().contains("uq_users_email"));
}
