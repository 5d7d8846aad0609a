#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use cardify_core::clock::{Clock, FixedClock};
use cardify_core::types::{DbId, Timestamp};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cardify_api::auth::jwt::{generate_access_token, JwtConfig};
use cardify_api::auth::password::hash_password;
use cardify_api::config::ServerConfig;
use cardify_api::router::build_app_router;
use cardify_api::state::AppState;
use cardify_db::models::user::CreateUser;
use cardify_db::repositories::UserRepo;

/// Plaintext password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_data: false,
        jwt: JwtConfig {
            secret: "test-jwt-secret-for-integration-tests".to_string(),
            expiry_mins: 15,
        },
    }
}

/// The instant every test app treats as "now" unless given another clock.
pub fn test_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}

/// Build the full application router against `pool`, with a UTC clock fixed
/// at [`test_now`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_clock(pool, Arc::new(FixedClock::utc(test_now())))
}

/// Build the full application router with an explicit clock.
pub fn build_test_app_with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Insert a user directly and return its id plus a valid access token.
pub async fn create_user(pool: &PgPool, email: &str) -> (DbId, String) {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, &user.email, &test_config().jwt)
        .expect("token generation should succeed");
    (user.id, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request("GET", uri, None)).await
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request("GET", uri, Some(token))).await
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request("POST", uri, None, body)).await
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request("POST", uri, Some(token), body)).await
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request("DELETE", uri, Some(token))).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a deck with `cards` (front, back) via the API and return its JSON
/// summary.
pub async fn create_deck(
    pool: &PgPool,
    token: &str,
    title: &str,
    cards: &[(&str, &str)],
) -> serde_json::Value {
    let cards: Vec<_> = cards
        .iter()
        .map(|(front, back)| serde_json::json!({ "front_text": front, "back_text": back }))
        .collect();
    let body = serde_json::json!({ "title": title, "subject": "Testing", "cards": cards });

    let response = post_json_auth(build_test_app(pool.clone()), "/api/v1/decks", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Card ids of a deck in creation order, read through the study endpoint.
pub async fn card_ids(pool: &PgPool, token: &str, deck_id: i64) -> Vec<i64> {
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/decks/{deck_id}/study"),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

/// Review a card via the API and return the response JSON `data`.
pub async fn review(pool: &PgPool, token: &str, card_id: i64, action: &str) -> serde_json::Value {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/cards/{card_id}/review"),
        serde_json::json!({ "action": action }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}
