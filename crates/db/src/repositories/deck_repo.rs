//! Repository for the `decks` table.
//!
//! Decks own their cards, so creation and deletion of cards (and the
//! progress rows hanging off them) happen here inside one transaction.

use cardify_core::deck::NewDeck;
use cardify_core::progress::{ProgressStatus, StatusId};
use cardify_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::card::{Card, CreateCard};
use crate::models::deck::Deck;
use crate::repositories::card_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, subject, created_at, updated_at";

/// Provides CRUD operations for decks.
pub struct DeckRepo;

impl DeckRepo {
    /// Insert a deck, its cards, and a NEW progress row per card for the owner.
    ///
    /// Everything is written in a single transaction. Cards are returned in
    /// creation order.
    pub async fn create_with_cards(
        pool: &PgPool,
        owner_id: DbId,
        input: &NewDeck,
    ) -> Result<(Deck, Vec<Card>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO decks (owner_id, title, subject)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let deck = sqlx::query_as::<_, Deck>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.subject)
            .fetch_one(&mut *tx)
            .await?;

        let mut cards = Vec::with_capacity(input.cards.len());
        for card in &input.cards {
            let create = CreateCard {
                deck_id: deck.id,
                front_text: card.front_text.clone(),
                back_text: card.back_text.clone(),
                image_url: card.image_url.clone(),
            };
            let card = insert_card(&mut *tx, &create).await?;
            insert_new_progress(&mut *tx, owner_id, card.id).await?;
            cards.push(card);
        }

        tx.commit().await?;
        Ok((deck, cards))
    }

    /// Find a deck by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's decks, most recently updated first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Deck>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM decks
             WHERE owner_id = $1
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a deck together with its cards and every progress row on them.
    ///
    /// Dependents go first so the foreign keys are never violated. Returns
    /// `true` if the deck row existed.
    pub async fn delete_with_dependents(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let progress = sqlx::query(
            "DELETE FROM card_progress
             WHERE card_id IN (SELECT id FROM cards WHERE deck_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let cards = sqlx::query("DELETE FROM cards WHERE deck_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            deck_id = id,
            cards = cards.rows_affected(),
            progress = progress.rows_affected(),
            "Deleted deck dependents",
        );
        Ok(result.rows_affected() > 0)
    }

    /// One `(deck_id, status_id)` pair per card across `deck_ids`, with the
    /// status of `user_id`'s progress on that card (`None` when absent).
    pub async fn card_statuses(
        pool: &PgPool,
        user_id: DbId,
        deck_ids: &[DbId],
    ) -> Result<Vec<(DbId, Option<StatusId>)>, sqlx::Error> {
        if deck_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, (DbId, Option<StatusId>)>(
            "SELECT c.deck_id, cp.status_id
             FROM cards c
             LEFT JOIN card_progress cp ON cp.card_id = c.id AND cp.user_id = $1
             WHERE c.deck_id = ANY($2)
             ORDER BY c.deck_id, c.id",
        )
        .bind(user_id)
        .bind(deck_ids)
        .fetch_all(pool)
        .await
    }
}

async fn insert_card(conn: &mut PgConnection, input: &CreateCard) -> Result<Card, sqlx::Error> {
    let query = format!(
        "INSERT INTO cards (deck_id, front_text, back_text, image_url)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        card_repo::COLUMNS
    );
    sqlx::query_as::<_, Card>(&query)
        .bind(input.deck_id)
        .bind(&input.front_text)
        .bind(&input.back_text)
        .bind(&input.image_url)
        .fetch_one(conn)
        .await
}

async fn insert_new_progress(
    conn: &mut PgConnection,
    user_id: DbId,
    card_id: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO card_progress (user_id, card_id, status_id)
         VALUES ($1, $2, $3)
         ON CONFLICT ON CONSTRAINT uq_card_progress_user_card DO NOTHING",
    )
    .bind(user_id)
    .bind(card_id)
    .bind(ProgressStatus::New.id())
    .execute(conn)
    .await?;
    Ok(())
}
