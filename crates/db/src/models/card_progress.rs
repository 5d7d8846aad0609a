//! Card progress entity model.

use cardify_core::progress::{ProgressCounters, ProgressStatus, StatusId};
use cardify_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `card_progress` table. Unique per `(user_id, card_id)`.
#[derive(Debug, Clone, FromRow)]
pub struct CardProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub card_id: DbId,
    pub status_id: StatusId,
    pub times_reviewed: i32,
    pub times_mastered: i32,
    pub times_struggled: i32,
    pub last_reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CardProgress {
    /// Resolve the stored status id.
    ///
    /// The foreign key to `progress_statuses` keeps ids valid; an unknown id
    /// would only appear if the lookup table grew, and reads as NEW.
    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::from_id(self.status_id).unwrap_or(ProgressStatus::New)
    }

    /// The mutable counters of this record.
    pub fn counters(&self) -> ProgressCounters {
        ProgressCounters {
            status: self.status(),
            times_reviewed: self.times_reviewed,
            times_mastered: self.times_mastered,
            times_struggled: self.times_struggled,
            last_reviewed_at: self.last_reviewed_at,
        }
    }
}
