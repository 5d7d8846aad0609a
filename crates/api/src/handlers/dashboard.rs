//! Handler for the per-user dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use cardify_core::progress::ProgressStatus;
use cardify_core::stats::DashboardStats;
use cardify_db::repositories::CardProgressRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Mastered and struggling totals across all decks, plus how many cards were
/// last reviewed during the current server-local day.
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let (start, end) = state.clock.today();

    let mastered_cards =
        CardProgressRepo::count_by_status(pool, auth.user_id, ProgressStatus::Mastered).await?;
    let struggling_cards =
        CardProgressRepo::count_by_status(pool, auth.user_id, ProgressStatus::Struggling).await?;
    let reviewed_today =
        CardProgressRepo::count_reviewed_between(pool, auth.user_id, start, end).await?;

    let stats = DashboardStats {
        mastered_cards,
        struggling_cards,
        reviewed_today,
    };

    Ok(DataResponse::new(stats))
}
