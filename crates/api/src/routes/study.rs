//! Route definitions for cross-deck study.

use axum::routing::get;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Routes mounted at `/study`.
///
/// ```text
/// GET /quick?limit=N    -> quick_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quick", get(card::quick_review))
}
