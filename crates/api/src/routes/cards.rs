//! Route definitions for the `/cards` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Routes mounted at `/cards`.
///
/// ```text
/// POST /{id}/review     -> review_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/review", post(card::review_card))
}
