//! Deck entity model and response shapes.

use cardify_core::stats::DeckStats;
use cardify_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::card::StudyCard;

/// A row from the `decks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deck {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub subject: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Deck as shown in listings: metadata plus mastery stats.
#[derive(Debug, Clone, Serialize)]
pub struct DeckSummary {
    pub id: DbId,
    pub title: String,
    pub subject: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub stats: DeckStats,
}

impl DeckSummary {
    pub fn new(deck: Deck, stats: DeckStats) -> Self {
        Self {
            id: deck.id,
            title: deck.title,
            subject: deck.subject,
            created_at: deck.created_at,
            updated_at: deck.updated_at,
            stats,
        }
    }
}

/// A single deck with every card and the caller's progress on each.
#[derive(Debug, Clone, Serialize)]
pub struct DeckDetail {
    #[serde(flatten)]
    pub summary: DeckSummary,
    pub cards: Vec<StudyCard>,
}
