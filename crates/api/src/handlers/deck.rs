//! Handlers for the `/decks` resource.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever
//! touch decks owned by the caller.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cardify_core::deck::{validate_new_deck, NewDeck};
use cardify_core::progress::{ProgressCounters, ProgressStatus};
use cardify_core::stats::compute_deck_stats;
use cardify_core::study::pair_with_progress;
use cardify_core::types::DbId;
use cardify_db::models::card::StudyCard;
use cardify_db::models::deck::{Deck, DeckDetail, DeckSummary};
use cardify_db::repositories::{CardProgressRepo, CardRepo, DeckRepo};
use cardify_db::DbPool;

use crate::error::AppResult;
use crate::guard::authorize_deck;
use crate::middleware::auth::AuthUser;
use crate::response::{Created, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Deck CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/decks
///
/// Create a deck with its cards. The owner starts with a NEW progress record
/// on every card.
pub async fn create_deck(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewDeck>,
) -> AppResult<impl IntoResponse> {
    validate_new_deck(&input)?;

    let (deck, cards) = DeckRepo::create_with_cards(&state.pool, auth.user_id, &input).await?;

    let statuses = vec![Some(ProgressStatus::New); cards.len()];
    let summary = DeckSummary::new(deck, compute_deck_stats(&statuses));

    tracing::info!(
        deck_id = summary.id,
        user_id = auth.user_id,
        cards = cards.len(),
        "Deck created",
    );

    Ok(Created(summary))
}

/// GET /api/v1/decks
///
/// List the caller's decks, most recently updated first, with mastery stats.
pub async fn list_decks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let decks = DeckRepo::list_by_owner(&state.pool, auth.user_id).await?;

    let deck_ids: Vec<DbId> = decks.iter().map(|d| d.id).collect();
    let rows = DeckRepo::card_statuses(&state.pool, auth.user_id, &deck_ids).await?;

    let mut statuses: HashMap<DbId, Vec<Option<ProgressStatus>>> = HashMap::new();
    for (deck_id, status_id) in rows {
        statuses
            .entry(deck_id)
            .or_default()
            .push(status_id.and_then(ProgressStatus::from_id));
    }

    let summaries: Vec<DeckSummary> = decks
        .into_iter()
        .map(|deck| {
            let deck_statuses = statuses.get(&deck.id).map(Vec::as_slice).unwrap_or_default();
            DeckSummary::new(deck, compute_deck_stats(deck_statuses))
        })
        .collect();

    Ok(DataResponse::new(summaries))
}

/// GET /api/v1/decks/{id}
///
/// A single deck with its stats and every card paired with the caller's
/// progress.
pub async fn get_deck(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(deck_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deck = authorize_deck(&state.pool, deck_id, &auth).await?;
    let (summary, cards) = load_deck_cards(&state.pool, deck, auth.user_id).await?;

    Ok(DataResponse::new(DeckDetail { summary, cards }))
}

/// DELETE /api/v1/decks/{id}
///
/// Delete a deck, its cards, and all progress on those cards. Returns 204.
pub async fn delete_deck(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(deck_id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize_deck(&state.pool, deck_id, &auth).await?;

    DeckRepo::delete_with_dependents(&state.pool, deck_id).await?;

    tracing::info!(deck_id, user_id = auth.user_id, "Deck deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Study
// ---------------------------------------------------------------------------

/// GET /api/v1/decks/{id}/study
///
/// Every card of the deck in creation order, each with the caller's progress
/// (NEW when the caller has never reviewed it).
pub async fn study_cards(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(deck_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deck = authorize_deck(&state.pool, deck_id, &auth).await?;
    let (_, cards) = load_deck_cards(&state.pool, deck, auth.user_id).await?;

    Ok(DataResponse::new(cards))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a deck's cards with `user_id`'s progress and compute its summary.
async fn load_deck_cards(
    pool: &DbPool,
    deck: Deck,
    user_id: DbId,
) -> AppResult<(DeckSummary, Vec<StudyCard>)> {
    let cards = CardRepo::list_by_deck(pool, deck.id).await?;
    let progress: HashMap<DbId, ProgressCounters> =
        CardProgressRepo::list_for_deck(pool, user_id, deck.id)
            .await?
            .into_iter()
            .map(|row| (row.card_id, row.counters()))
            .collect();

    let statuses: Vec<Option<ProgressStatus>> = cards
        .iter()
        .map(|card| progress.get(&card.id).map(|p| p.status))
        .collect();
    let summary = DeckSummary::new(deck, compute_deck_stats(&statuses));

    let study_cards = pair_with_progress(cards, |card| card.id, &progress)
        .into_iter()
        .map(|(card, counters)| StudyCard::new(card, counters))
        .collect();

    Ok((summary, study_cards))
}
