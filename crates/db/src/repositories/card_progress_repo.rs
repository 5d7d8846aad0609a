//! Repository for the `card_progress` table.

use cardify_core::progress::{ProgressCounters, ProgressStatus};
use cardify_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::card_progress::CardProgress;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, card_id, status_id, times_reviewed, times_mastered, \
                       times_struggled, last_reviewed_at, created_at, updated_at";

/// Provides lookup, upsert and aggregate queries for card progress.
pub struct CardProgressRepo;

impl CardProgressRepo {
    /// Find the progress row for one user and card.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        card_id: DbId,
    ) -> Result<Option<CardProgress>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM card_progress WHERE user_id = $1 AND card_id = $2");
        sqlx::query_as::<_, CardProgress>(&query)
            .bind(user_id)
            .bind(card_id)
            .fetch_optional(pool)
            .await
    }

    /// All of a user's progress rows for the cards of one deck.
    pub async fn list_for_deck(
        pool: &PgPool,
        user_id: DbId,
        deck_id: DbId,
    ) -> Result<Vec<CardProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM card_progress
             WHERE user_id = $1
               AND card_id IN (SELECT id FROM cards WHERE deck_id = $2)"
        );
        sqlx::query_as::<_, CardProgress>(&query)
            .bind(user_id)
            .bind(deck_id)
            .fetch_all(pool)
            .await
    }

    /// Every progress row of a user whose status is not MASTERED.
    ///
    /// Unordered: priority ordering is applied by the study selector.
    pub async fn list_non_mastered(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CardProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM card_progress
             WHERE user_id = $1 AND status_id <> $2"
        );
        sqlx::query_as::<_, CardProgress>(&query)
            .bind(user_id)
            .bind(ProgressStatus::Mastered.id())
            .fetch_all(pool)
            .await
    }

    /// Insert or overwrite the progress row for `(user_id, card_id)`.
    ///
    /// Concurrent reviews of the same card resolve last-write-wins on the
    /// unique constraint.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        card_id: DbId,
        counters: &ProgressCounters,
    ) -> Result<CardProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO card_progress
                (user_id, card_id, status_id, times_reviewed, times_mastered,
                 times_struggled, last_reviewed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_card_progress_user_card DO UPDATE SET
                status_id = EXCLUDED.status_id,
                times_reviewed = EXCLUDED.times_reviewed,
                times_mastered = EXCLUDED.times_mastered,
                times_struggled = EXCLUDED.times_struggled,
                last_reviewed_at = EXCLUDED.last_reviewed_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CardProgress>(&query)
            .bind(user_id)
            .bind(card_id)
            .bind(counters.status.id())
            .bind(counters.times_reviewed)
            .bind(counters.times_mastered)
            .bind(counters.times_struggled)
            .bind(counters.last_reviewed_at)
            .fetch_one(pool)
            .await
    }

    /// Count a user's progress rows in the given status, across all decks.
    pub async fn count_by_status(
        pool: &PgPool,
        user_id: DbId,
        status: ProgressStatus,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM card_progress WHERE user_id = $1 AND status_id = $2",
        )
        .bind(user_id)
        .bind(status.id())
        .fetch_one(pool)
        .await
    }

    /// Count a user's progress rows last reviewed within `[start, end)`.
    pub async fn count_reviewed_between(
        pool: &PgPool,
        user_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM card_progress
             WHERE user_id = $1
               AND last_reviewed_at >= $2
               AND last_reviewed_at < $3",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await
    }
}
