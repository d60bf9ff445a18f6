use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A catalog achievement unlocked by cumulative points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub points_required: u64,
}

/// Award record joining a user to a badge. At most one per (user, badge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserBadge {
    pub user_id: String,
    pub badge_id: String,
    pub earned_at: jiff::Timestamp,
}

/// A user's relationship to one badge.
///
/// `Locked -> Unlocked` follows from point totals alone; `Unlocked -> Awarded`
/// requires a stored [`UserBadge`] and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BadgeState {
    Locked,
    Unlocked,
    Awarded,
}
