//! Card selection for full-deck study and cross-deck quick review.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::progress::{ProgressCounters, ProgressStatus};
use crate::types::DbId;

/// Number of cards returned by quick review when no limit is given.
pub const DEFAULT_QUICK_REVIEW_LIMIT: usize = 10;

/// Resolve the requested quick review limit.
///
/// The value is used as given (`0` selects nothing); only a negative limit
/// is rejected.
pub fn quick_review_limit(limit: Option<i64>) -> Result<usize, CoreError> {
    match limit {
        None => Ok(DEFAULT_QUICK_REVIEW_LIMIT),
        Some(n) => usize::try_from(n).map_err(|_| {
            CoreError::ValidationFailed(format!("limit must not be negative, got {n}"))
        }),
    }
}

/// Pair every card with the user's progress for it, keeping card order.
///
/// Cards without a progress row get the implicit NEW record.
pub fn pair_with_progress<C>(
    cards: Vec<C>,
    card_id: impl Fn(&C) -> DbId,
    progress: &HashMap<DbId, ProgressCounters>,
) -> Vec<(C, ProgressCounters)> {
    cards
        .into_iter()
        .map(|card| {
            let counters = progress
                .get(&card_id(&card))
                .copied()
                .unwrap_or_else(ProgressCounters::fresh);
            (card, counters)
        })
        .collect()
}

/// Order quick review candidates and keep the first `limit`.
///
/// MASTERED entries are dropped. The rest sort by
/// [`ProgressStatus::review_rank`] and then by `last_reviewed_at` ascending,
/// with never-reviewed entries first. The sort is stable.
pub fn order_quick_review<T>(
    candidates: Vec<T>,
    limit: usize,
    progress: impl Fn(&T) -> &ProgressCounters,
) -> Vec<T> {
    let mut selected: Vec<T> = candidates
        .into_iter()
        .filter(|c| progress(c).status != ProgressStatus::Mastered)
        .collect();

    selected.sort_by_key(|c| {
        let p = progress(c);
        (p.status.review_rank(), p.last_reviewed_at)
    });
    selected.truncate(limit);
    selected
}

/// Attach cards to ordered `(card_id, progress)` entries.
///
/// A progress row whose card no longer exists means the tables are
/// inconsistent, so this fails with [`CoreError::Internal`].
pub fn resolve_cards<C>(
    ordered: Vec<(DbId, ProgressCounters)>,
    mut cards: HashMap<DbId, C>,
) -> Result<Vec<(C, ProgressCounters)>, CoreError> {
    ordered
        .into_iter()
        .map(|(card_id, counters)| {
            cards
                .remove(&card_id)
                .map(|card| (card, counters))
                .ok_or_else(|| {
                    CoreError::Internal(format!(
                        "Progress references missing card {card_id}"
                    ))
                })
        })
        .collect()
}
