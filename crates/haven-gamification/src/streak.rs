use jiff::civil::Date;

use haven_core::models::activity::ActivityEvent;
use haven_core::models::profile::GamificationProfile;

use crate::error::GamificationError;

/// Apply one activity to a profile.
///
/// Points are added. The streak is judged by calendar day against
/// `last_activity_date`: same day leaves it alone, the following day extends
/// it by one, anything else (including no previous activity) restarts it at
/// one. `last_activity_date` always becomes `today`.
///
/// `longest_streak` is left untouched; see [`sync_longest_streak`].
pub fn record_activity(
    profile: &GamificationProfile,
    event: &ActivityEvent,
    today: Date,
) -> Result<GamificationProfile, GamificationError> {
    if event.points_earned == 0 {
        return Err(GamificationError::NoPoints);
    }

    let total_points = profile
        .total_points
        .checked_add(u64::from(event.points_earned))
        .ok_or(GamificationError::PointsOverflow)?;

    let current_streak = match profile.last_activity_date {
        Some(last) if last == today => profile.current_streak,
        Some(last) if today.yesterday().ok() == Some(last) => {
            profile.current_streak.saturating_add(1)
        }
        _ => 1,
    };

    Ok(GamificationProfile {
        total_points,
        current_streak,
        longest_streak: profile.longest_streak,
        last_activity_date: Some(today),
    })
}

/// Raise `longest_streak` to `current_streak` when it has been overtaken.
pub fn sync_longest_streak(profile: &mut GamificationProfile) {
    profile.longest_streak = profile.longest_streak.max(profile.current_streak);
}
