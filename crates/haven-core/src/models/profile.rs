use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-user accrual state. One per user; a missing profile reads as the
/// zeroed default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GamificationProfile {
    pub total_points: u64,
    /// Consecutive calendar days (UTC) with at least one activity.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_activity_date: Option<jiff::civil::Date>,
}
