//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /study/quick` (`?limit=`).
///
/// Absent means the default of 10; a negative value is rejected.
#[derive(Debug, Deserialize)]
pub struct QuickReviewParams {
    pub limit: Option<i64>,
}
