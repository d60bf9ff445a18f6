//! Points, streaks and badges for one recorded activity.
//!
//! Order of writes: the profile (conditional on the ETag read, retried on a
//! lost race), then the ledger entry, then any newly earned badges. A request
//! rejected before the profile commits writes nothing. Once it commits, later
//! failures are logged and the activity still counts: the ledger insert is
//! create-only under a pre-generated id, and badges are re-evaluated on the
//! next activity. Badge inserts are idempotent per (user, badge), so a
//! concurrent request that awards the same badge first turns this one's
//! insert into a no-op.

use std::collections::HashSet;

use jiff::civil::Date;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use haven_audit::events::{AuditAction, AuditEvent};
use haven_core::models::activity::{ActivityEvent, ActivityRecord};
use haven_core::models::badge::{Badge, UserBadge};
use haven_core::models::profile::GamificationProfile;
use haven_gamification::badges::{default_badges, evaluate_badges};
use haven_gamification::error::GamificationError;
use haven_gamification::streak::{record_activity, sync_longest_streak};
use haven_storage::error::StorageError;
use haven_storage::store::{AwardOutcome, WellnessStore};

#[derive(Debug, Error)]
pub enum RewardError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Gamification(#[from] GamificationError),

    #[error("profile update lost {attempts} consecutive races; try again")]
    Contention { attempts: u32 },
}

/// What one activity earned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub points_earned: u32,
    pub new_badges: Vec<Badge>,
    pub profile: GamificationProfile,
}

/// The stored badge catalog, or the built-in one when none is stored.
pub async fn badge_catalog(store: &dyn WellnessStore) -> Result<Vec<Badge>, StorageError> {
    Ok(store.get_badge_catalog().await?.unwrap_or_else(default_badges))
}

/// Record an activity and award whatever it unlocks.
pub async fn record(
    store: &dyn WellnessStore,
    user_id: &str,
    event: &ActivityEvent,
    today: Date,
    attempts: u32,
) -> Result<Reward, RewardError> {
    if event.points_earned == 0 {
        return Err(GamificationError::NoPoints.into());
    }

    let record = ActivityRecord {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        activity_type: event.activity_type.clone(),
        points_earned: event.points_earned,
        occurred_on: today,
        recorded_at: jiff::Timestamp::now(),
    };

    let profile = update_profile(store, user_id, event, today, attempts).await?;

    match store.insert_activity(&record).await {
        Ok(()) | Err(StorageError::AlreadyExists { .. }) => {}
        Err(e) => {
            warn!(
                user_id = %user_id,
                activity_id = %record.id,
                error = %e,
                "ledger write failed after profile update"
            );
        }
    }

    AuditEvent::new(AuditAction::ActivityRecord, record.id.to_string(), user_id)
        .with_details(serde_json::json!({
            "activityType": event.activity_type,
            "points": event.points_earned,
            "totalPoints": profile.total_points,
            "currentStreak": profile.current_streak,
        }))
        .emit();

    let new_badges = match award_badges(store, user_id, profile.total_points).await {
        Ok(badges) => badges,
        Err(e) => {
            warn!(
                user_id = %user_id,
                error = %e,
                "badge evaluation failed; deferred to next activity"
            );
            Vec::new()
        }
    };

    Ok(Reward {
        points_earned: event.points_earned,
        new_badges,
        profile,
    })
}

/// Read, compute, conditional write; repeat on a lost race.
async fn update_profile(
    store: &dyn WellnessStore,
    user_id: &str,
    event: &ActivityEvent,
    today: Date,
    attempts: u32,
) -> Result<GamificationProfile, RewardError> {
    let attempts = attempts.max(1);
    for attempt in 1..=attempts {
        let (current, etag) = match store.get_profile(user_id).await? {
            Some((profile, etag)) => (profile, Some(etag)),
            None => (GamificationProfile::default(), None),
        };

        let mut next = record_activity(&current, event, today)?;
        sync_longest_streak(&mut next);

        match store.save_profile(user_id, &next, etag.as_deref()).await {
            Ok(_) => return Ok(next),
            Err(StorageError::PreconditionFailed { .. }) => {
                warn!(user_id = %user_id, attempt, "profile changed concurrently, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(RewardError::Contention { attempts })
}

async fn award_badges(
    store: &dyn WellnessStore,
    user_id: &str,
    total_points: u64,
) -> Result<Vec<Badge>, RewardError> {
    let catalog = badge_catalog(store).await?;
    let earned: HashSet<String> = store
        .list_user_badges(user_id)
        .await?
        .into_iter()
        .map(|b| b.badge_id)
        .collect();

    let mut awarded = Vec::new();
    for badge in evaluate_badges(&catalog, total_points, &earned) {
        let award = UserBadge {
            user_id: user_id.to_string(),
            badge_id: badge.id.clone(),
            earned_at: jiff::Timestamp::now(),
        };
        match store.insert_user_badge(&award).await? {
            AwardOutcome::Inserted => {
                AuditEvent::new(AuditAction::BadgeAward, &badge.id, user_id).emit();
                awarded.push(badge.clone());
            }
            AwardOutcome::AlreadyAwarded => {
                info!(user_id = %user_id, badge_id = %badge.id, "badge already awarded");
            }
        }
    }
    Ok(awarded)
}
