//! Deck creation input and its validation rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Maximum length for a deck title.
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Request body for creating a deck together with its cards.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewDeck {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "At least one card is required"), nested)]
    pub cards: Vec<NewCard>,
}

/// One card inside a [`NewDeck`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCard {
    #[validate(custom(function = "not_blank"))]
    pub front_text: String,
    #[validate(custom(function = "not_blank"))]
    pub back_text: String,
    pub image_url: Option<String>,
}

/// Reject empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Validate a deck creation request.
pub fn validate_new_deck(input: &NewDeck) -> Result<(), CoreError> {
    input.validate()?;
    Ok(())
}
