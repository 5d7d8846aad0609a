//! Deck and dashboard mastery statistics.

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::progress::ProgressStatus;
use crate::types::Timestamp;

/// Mastery summary for one deck from one user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeckStats {
    pub total_cards: i64,
    pub mastered_cards: i64,
    pub mastered_percent: f64,
}

/// Cross-deck totals shown on the user's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub mastered_cards: i64,
    pub struggling_cards: i64,
    pub reviewed_today: i64,
}

/// Percentage of mastered cards. An empty deck is exactly `0.0`.
pub fn mastered_percent(mastered: i64, total: i64) -> f64 {
    if total > 0 {
        mastered as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// Aggregate one deck given the status of each of its cards.
///
/// `None` means the user has no progress row for that card; it counts
/// toward the total but never as mastered.
pub fn compute_deck_stats(statuses: &[Option<ProgressStatus>]) -> DeckStats {
    let total_cards = statuses.len() as i64;
    let mastered_cards = statuses
        .iter()
        .filter(|s| matches!(s, Some(ProgressStatus::Mastered)))
        .count() as i64;

    DeckStats {
        total_cards,
        mastered_cards,
        mastered_percent: mastered_percent(mastered_cards, total_cards),
    }
}

/// UTC bounds `[start, end)` of the calendar day in `tz` that contains `now`.
///
/// Across a DST change the day is 23 or 25 hours long.
pub fn local_day_bounds<Tz: TimeZone>(now: Timestamp, tz: &Tz) -> (Timestamp, Timestamp) {
    let today = now.with_timezone(tz).date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);
    (start_of_day(tz, today), start_of_day(tz, tomorrow))
}

/// First existing local instant of `date`. Some zones skip midnight itself
/// when DST begins, in which case the day starts at the end of the gap.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Timestamp {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=2)
        .map(|hours| midnight + Duration::hours(hours))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
