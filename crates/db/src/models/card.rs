//! Card entity model and DTOs.

use cardify_core::progress::ProgressCounters;
use cardify_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cards` table. Cards are immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub deck_id: DbId,
    pub front_text: String,
    pub back_text: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a card into an existing deck.
#[derive(Debug, Clone)]
pub struct CreateCard {
    pub deck_id: DbId,
    pub front_text: String,
    pub back_text: String,
    pub image_url: Option<String>,
}

/// A card paired with one user's progress on it.
#[derive(Debug, Clone, Serialize)]
pub struct StudyCard {
    pub id: DbId,
    pub front_text: String,
    pub back_text: String,
    pub image_url: Option<String>,
    pub progress: ProgressCounters,
}

impl StudyCard {
    pub fn new(card: Card, progress: ProgressCounters) -> Self {
        Self {
            id: card.id,
            front_text: card.front_text,
            back_text: card.back_text,
            image_url: card.image_url,
            progress,
        }
    }
}
