//! Repository for the `cards` table.

use cardify_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::Card;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, deck_id, front_text, back_text, image_url, created_at";

/// Provides read operations for cards. Cards are written by [`DeckRepo`].
///
/// [`DeckRepo`]: crate::repositories::DeckRepo
pub struct CardRepo;

impl CardRepo {
    /// Find a card by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a deck's cards in creation order.
    pub async fn list_by_deck(pool: &PgPool, deck_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE deck_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Card>(&query)
            .bind(deck_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch every card whose id is in `ids`. Missing ids are simply absent.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Card>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = ANY($1)");
        sqlx::query_as::<_, Card>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Number of cards in a deck.
    pub async fn count_by_deck(pool: &PgPool, deck_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cards WHERE deck_id = $1")
            .bind(deck_id)
            .fetch_one(pool)
            .await
    }
}
