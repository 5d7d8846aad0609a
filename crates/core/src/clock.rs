//! Wall-clock source for review timestamps and the dashboard's "today".

use chrono::{FixedOffset, Local, Offset, Utc};

use crate::stats::local_day_bounds;
use crate::types::Timestamp;

/// Supplies the current instant and the bounds of the current local day.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> Timestamp;

    /// UTC bounds `[start, end)` of the server-local calendar day containing
    /// [`Clock::now`].
    fn today(&self) -> (Timestamp, Timestamp);
}

/// Production clock backed by the system time and the local timezone rules,
/// so days that cross a DST change keep their true length.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn today(&self) -> (Timestamp, Timestamp) {
        local_day_bounds(self.now(), &Local)
    }
}

/// Clock pinned to a fixed instant and offset. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: Timestamp,
    pub offset: FixedOffset,
}

impl FixedClock {
    /// A fixed clock in UTC.
    pub fn utc(now: Timestamp) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn today(&self) -> (Timestamp, Timestamp) {
        local_day_bounds(self.now, &self.offset)
    }
}
