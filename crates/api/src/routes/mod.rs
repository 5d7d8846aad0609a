pub mod auth;
pub mod cards;
pub mod dashboard;
pub mod decks;
pub mod generate;
pub mod health;
pub mod study;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     signup
/// /auth/login                      login
///
/// /decks                           list, create
/// /decks/{id}                      get, delete
/// /decks/{id}/study                study cards
///
/// /cards/{id}/review               review card
/// /study/quick                     quick review (?limit=)
///
/// /dashboard/stats                 dashboard totals
/// /generate                        generate candidate cards
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login).
        .nest("/auth", auth::router())
        // Deck CRUD and per-deck study.
        .nest("/decks", decks::router())
        // Card review.
        .nest("/cards", cards::router())
        // Cross-deck quick review.
        .nest("/study", study::router())
        // Per-user dashboard.
        .nest("/dashboard", dashboard::router())
        // Template-based card generation.
        .nest("/generate", generate::router())
}
