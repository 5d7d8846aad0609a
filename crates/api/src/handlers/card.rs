//! Handlers for card review and cross-deck quick review.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use cardify_core::progress::{apply_review, ProgressCounters, ProgressStatus};
use cardify_core::study::{order_quick_review, quick_review_limit, resolve_cards};
use cardify_core::types::DbId;
use cardify_db::models::card::StudyCard;
use cardify_db::repositories::{CardProgressRepo, CardRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::guard::authorize_card;
use crate::middleware::auth::AuthUser;
use crate::query::QuickReviewParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /cards/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// One of `NEW`, `LEARNING`, `MASTERED`, `STRUGGLING`.
    pub action: ProgressStatus,
}

/// The caller's progress on a card after a review.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub card_id: DbId,
    #[serde(flatten)]
    pub progress: ProgressCounters,
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// POST /api/v1/cards/{id}/review
///
/// Record one review of a card by the caller and return the new progress.
pub async fn review_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(card_id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let (card, deck) = authorize_card(&state.pool, card_id, &auth).await?;

    let existing = CardProgressRepo::find(&state.pool, auth.user_id, card.id)
        .await?
        .map(|row| row.counters());
    let next = apply_review(existing, input.action, state.clock.now());

    let saved = CardProgressRepo::upsert(&state.pool, auth.user_id, card.id, &next).await?;

    tracing::info!(
        card_id,
        deck_id = deck.id,
        user_id = auth.user_id,
        action = %input.action,
        status = %saved.status(),
        "Card reviewed",
    );

    Ok(DataResponse::new(ReviewResponse {
        card_id: saved.card_id,
        progress: saved.counters(),
    }))
}

// ---------------------------------------------------------------------------
// Quick review
// ---------------------------------------------------------------------------

/// GET /api/v1/study/quick?limit=N
///
/// The caller's non-mastered cards across all decks, STRUGGLING first, then
/// LEARNING, then NEW; oldest review first within a status.
pub async fn quick_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<QuickReviewParams>,
) -> AppResult<impl IntoResponse> {
    let limit = quick_review_limit(params.limit)?;

    let candidates: Vec<(DbId, ProgressCounters)> =
        CardProgressRepo::list_non_mastered(&state.pool, auth.user_id)
            .await?
            .into_iter()
            .map(|row| (row.card_id, row.counters()))
            .collect();
    let ordered = order_quick_review(candidates, limit, |(_, p)| p);

    let ids: Vec<DbId> = ordered.iter().map(|(id, _)| *id).collect();
    let cards: HashMap<DbId, _> = CardRepo::find_by_ids(&state.pool, &ids)
        .await?
        .into_iter()
        .map(|card| (card.id, card))
        .collect();

    let study_cards: Vec<StudyCard> = resolve_cards(ordered, cards)?
        .into_iter()
        .map(|(card, counters)| StudyCard::new(card, counters))
        .collect();

    tracing::debug!(
        user_id = auth.user_id,
        limit,
        selected = study_cards.len(),
        "Quick review selected",
    );

    Ok(DataResponse::new(study_cards))
}
