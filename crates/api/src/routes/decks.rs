//! Route definitions for the `/decks` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::deck;
use crate::state::AppState;

/// Routes mounted at `/decks`.
///
/// ```text
/// GET    /              -> list_decks
/// POST   /              -> create_deck
/// GET    /{id}          -> get_deck
/// DELETE /{id}          -> delete_deck
/// GET    /{id}/study    -> study_cards
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deck::list_decks).post(deck::create_deck))
        .route("/{id}", get(deck::get_deck).delete(deck::delete_deck))
        .route("/{id}/study", get(deck::study_cards))
}
