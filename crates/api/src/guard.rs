//! Ownership checks for decks and cards.
//!
//! Every deck or card operation resolves its target through one of these
//! functions first: a missing entity is 404, someone else's is 403.

use cardify_core::error::CoreError;
use cardify_core::types::DbId;
use cardify_db::models::card::Card;
use cardify_db::models::deck::Deck;
use cardify_db::repositories::{CardRepo, DeckRepo};
use cardify_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Load a deck and require that `user` owns it.
pub async fn authorize_deck(pool: &DbPool, deck_id: DbId, user: &AuthUser) -> AppResult<Deck> {
    let deck = DeckRepo::find_by_id(pool, deck_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deck",
            id: deck_id,
        }))?;

    ensure_owner(&deck, user)?;
    Ok(deck)
}

/// Load a card and its deck, requiring that `user` owns the deck.
pub async fn authorize_card(
    pool: &DbPool,
    card_id: DbId,
    user: &AuthUser,
) -> AppResult<(Card, Deck)> {
    let card = CardRepo::find_by_id(pool, card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))?;

    // A card without its deck means the foreign key was bypassed.
    let deck = DeckRepo::find_by_id(pool, card.deck_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Card {card_id} references missing deck {}",
                card.deck_id
            )))
        })?;

    ensure_owner(&deck, user)?;
    Ok((card, deck))
}

fn ensure_owner(deck: &Deck, user: &AuthUser) -> AppResult<()> {
    if deck.owner_id != user.user_id {
        tracing::warn!(
            deck_id = deck.id,
            user_id = user.user_id,
            "Access to another user's deck denied",
        );
        return Err(AppError::Core(CoreError::AccessDenied(
            "You do not have access to this deck".into(),
        )));
    }
    Ok(())
}
