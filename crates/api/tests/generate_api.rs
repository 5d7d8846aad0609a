//! HTTP-level integration tests for `POST /generate`.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{body_json, create_user, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn generate(pool: &PgPool, token: &str, topic: &str, count: i64) -> axum::response::Response {
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/generate",
        json!({ "topic": topic, "count": count }),
        token,
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generates_distinct_cards_from_topic_table(pool: PgPool) {
    let (_, token) = create_user(&pool, "gen@test.com").await;

    let response = generate(&pool, &token, "Zoo animals", 5).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let cards = json["data"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 5);
    let fronts: HashSet<&str> = cards
        .iter()
        .map(|c| c["front_text"].as_str().unwrap())
        .collect();
    assert_eq!(fronts.len(), 5, "cards must not repeat");
    assert!(cards.iter().all(|c| c["back_text"].is_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_topic_uses_generic_templates(pool: PgPool) {
    let (_, token) = create_user(&pool, "gen@test.com").await;

    let response = generate(&pool, &token, "Astronomy", 3).await;
    let json = body_json(response).await;

    let cards = json["data"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert!(cards
        .iter()
        .all(|c| c["front_text"].as_str().unwrap().contains("Astronomy")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_persists_nothing(pool: PgPool) {
    let (_, token) = create_user(&pool, "gen@test.com").await;

    let response = generate(&pool, &token, "chemistry", 4).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cards: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(cards, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_out_of_range_is_rejected(pool: PgPool) {
    let (_, token) = create_user(&pool, "gen@test.com").await;

    for count in [0, 21] {
        let response = generate(&pool, &token, "math", count).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "count {count}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_topic_is_rejected(pool: PgPool) {
    let (_, token) = create_user(&pool, "gen@test.com").await;

    let response = generate(&pool, &token, "   ", 5).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_FAILED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_requires_authentication(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/generate",
        json!({ "topic": "math", "count": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
