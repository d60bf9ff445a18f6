use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Input to the gamification engine: something the user just did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ActivityEvent {
    pub activity_type: String,
    pub points_earned: u32,
}

/// One immutable ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub user_id: String,
    pub activity_type: String,
    pub points_earned: u32,
    /// UTC calendar day the activity counted towards.
    pub occurred_on: jiff::civil::Date,
    pub recorded_at: jiff::Timestamp,
}
