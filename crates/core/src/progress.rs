//! Per-user card progress: status enum and the review state machine.
//!
//! A progress record tracks how a single user has fared with a single card.
//! [`apply_review`] computes the next record from the current one (or the
//! implicit NEW default when no record exists yet). Persistence is the
//! repository layer's job.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Status ID type matching SMALLINT in the `progress_statuses` lookup table.
pub type StatusId = i16;

/// Mastery status of a card for one user.
///
/// Discriminants match the seed order of the `progress_statuses` table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    New = 1,
    Learning = 2,
    Mastered = 3,
    Struggling = 4,
}

impl ProgressStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Resolve a database status ID. Returns `None` for unknown IDs.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::New),
            2 => Some(Self::Learning),
            3 => Some(Self::Mastered),
            4 => Some(Self::Struggling),
            _ => None,
        }
    }

    /// Priority used by quick review: lower ranks are studied first.
    ///
    /// This is an explicit table and must not be derived from the
    /// discriminant or declaration order.
    pub fn review_rank(self) -> u8 {
        match self {
            Self::Struggling => 0,
            Self::Learning => 1,
            Self::New => 2,
            Self::Mastered => 3,
        }
    }

    /// Upper-case name as exposed over the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Learning => "LEARNING",
            Self::Mastered => "MASTERED",
            Self::Struggling => "STRUGGLING",
        }
    }
}

impl From<ProgressStatus> for StatusId {
    fn from(value: ProgressStatus) -> Self {
        value as StatusId
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable part of a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressCounters {
    pub status: ProgressStatus,
    pub times_reviewed: i32,
    pub times_mastered: i32,
    pub times_struggled: i32,
    pub last_reviewed_at: Option<Timestamp>,
}

impl ProgressCounters {
    /// The implicit record for a card the user has never touched.
    pub fn fresh() -> Self {
        Self {
            status: ProgressStatus::New,
            times_reviewed: 0,
            times_mastered: 0,
            times_struggled: 0,
            last_reviewed_at: None,
        }
    }
}

impl Default for ProgressCounters {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Apply one review `action` to a progress record.
///
/// Every review bumps `times_reviewed` and stamps `last_reviewed_at`.
/// `Mastered` and `Struggling` also bump their own counter and set the
/// status; `Learning` only sets the status. `New` leaves status and the
/// per-action counters untouched (it is not a reset).
///
/// `times_reviewed >= times_mastered + times_struggled` is not enforced;
/// pre-seeded records may break it and that is carried forward as-is.
pub fn apply_review(
    existing: Option<ProgressCounters>,
    action: ProgressStatus,
    now: Timestamp,
) -> ProgressCounters {
    let mut next = existing.unwrap_or_else(ProgressCounters::fresh);

    next.times_reviewed += 1;
    next.last_reviewed_at = Some(now);

    match action {
        ProgressStatus::Mastered => {
            next.times_mastered += 1;
            next.status = ProgressStatus::Mastered;
        }
        ProgressStatus::Struggling => {
            next.times_struggled += 1;
            next.status = ProgressStatus::Struggling;
        }
        ProgressStatus::Learning => {
            next.status = ProgressStatus::Learning;
        }
        ProgressStatus::New => {}
    }

    next
}
