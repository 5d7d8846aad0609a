//! Handler for template-based card generation.

use axum::response::IntoResponse;
use axum::Json;
use cardify_core::generation::{generate_for_request, GenerateCardsRequest, GeneratedCard};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Response payload for `POST /generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub cards: Vec<GeneratedCard>,
}

/// POST /api/v1/generate
///
/// Produce candidate cards for a topic. Nothing is persisted.
pub async fn generate_cards(
    auth: AuthUser,
    Json(input): Json<GenerateCardsRequest>,
) -> AppResult<impl IntoResponse> {
    let cards = generate_for_request(&input, &mut rand::rng())?;

    tracing::debug!(
        user_id = auth.user_id,
        topic = %input.topic,
        count = cards.len(),
        "Generated cards",
    );

    Ok(DataResponse::new(GenerateResponse { cards }))
}
