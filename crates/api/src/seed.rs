//! Sample data for a fresh database.
//!
//! When enabled, [`seed_sample_data`] creates a demo account with one deck so
//! the UI has something to show on first launch.

use cardify_core::deck::{NewCard, NewDeck};
use cardify_core::error::CoreError;
use cardify_core::progress::{ProgressCounters, ProgressStatus};
use cardify_db::models::user::CreateUser;
use cardify_db::repositories::{CardProgressRepo, DeckRepo, UserRepo};
use cardify_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Email of the seeded demo account.
pub const SAMPLE_EMAIL: &str = "test@cardify.com";

/// Password of the seeded demo account.
pub const SAMPLE_PASSWORD: &str = "password123";

const SAMPLE_DECK_TITLE: &str = "Sample Biology Deck";
const SAMPLE_DECK_SUBJECT: &str = "Biology";

const SAMPLE_CARDS: [(&str, &str); 5] = [
    ("What is the powerhouse of the cell?", "Mitochondria"),
    ("What is the basic unit of life?", "Cell"),
    ("What process do plants use to make food?", "Photosynthesis"),
    ("What is DNA short for?", "Deoxyribonucleic acid"),
    ("What are the building blocks of proteins?", "Amino acids"),
];

/// Number of leading sample cards that start out MASTERED.
const PRE_MASTERED_CARDS: usize = 2;

/// Seed the demo account and deck if the database has no users.
///
/// Returns `true` when data was inserted.
pub async fn seed_sample_data(pool: &DbPool) -> AppResult<bool> {
    if UserRepo::count(pool).await? > 0 {
        tracing::debug!("Users already exist, skipping sample data");
        return Ok(false);
    }

    let password_hash = hash_password(SAMPLE_PASSWORD)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing error: {e}"))))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: SAMPLE_EMAIL.to_string(),
            password_hash,
        },
    )
    .await?;

    let deck_input = NewDeck {
        title: SAMPLE_DECK_TITLE.to_string(),
        subject: Some(SAMPLE_DECK_SUBJECT.to_string()),
        cards: SAMPLE_CARDS
            .iter()
            .map(|(front, back)| NewCard {
                front_text: front.to_string(),
                back_text: back.to_string(),
                image_url: None,
            })
            .collect(),
    };
    let (deck, cards) = DeckRepo::create_with_cards(pool, user.id, &deck_input).await?;

    // Seeded as mastered without a review, so times_reviewed stays 0.
    let mastered = ProgressCounters {
        status: ProgressStatus::Mastered,
        times_mastered: 1,
        ..ProgressCounters::fresh()
    };
    for card in cards.iter().take(PRE_MASTERED_CARDS) {
        CardProgressRepo::upsert(pool, user.id, card.id, &mastered).await?;
    }

    tracing::info!(
        user_id = user.id,
        deck_id = deck.id,
        email = SAMPLE_EMAIL,
        "Sample data seeded",
    );
    Ok(true)
}
