use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use haven_core::models::activity::{ActivityEvent, ActivityRecord};
use haven_gamification::activity::ActivityKind;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::rewards::{self, Reward};
use crate::services::today_utc;
use crate::state::AppState;

/// Largest award a single activity may carry.
const MAX_POINTS: u32 = 1000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBody {
    /// Optional; when present it must be the caller.
    #[serde(default)]
    user_id: Option<String>,
    activity_type: String,
    /// Defaults to the activity kind's standard award.
    #[serde(default)]
    points: Option<u32>,
}

#[derive(Serialize)]
pub struct RecordResponse {
    success: bool,
    #[serde(flatten)]
    reward: Reward,
}

pub async fn record_activity(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<RecordBody>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let Json(body) = payload?;

    if body.user_id.as_deref().is_some_and(|id| id != user.sub) {
        return Err(ApiError::Forbidden(
            "cannot record activity for another user".to_string(),
        ));
    }

    let activity_type = body.activity_type.trim();
    if activity_type.is_empty() {
        return Err(ApiError::BadRequest("activityType is required".to_string()));
    }

    let points = match (body.points, activity_type.parse::<ActivityKind>()) {
        (Some(points), _) => points,
        (None, Ok(kind)) => kind.default_points(),
        (None, Err(())) => {
            return Err(ApiError::BadRequest(format!(
                "points is required for activity type {activity_type}"
            )));
        }
    };
    if !(1..=MAX_POINTS).contains(&points) {
        return Err(ApiError::BadRequest(format!(
            "points must be between 1 and {MAX_POINTS}"
        )));
    }

    let event = ActivityEvent {
        activity_type: activity_type.to_string(),
        points_earned: points,
    };
    let reward = rewards::record(
        state.store.as_ref(),
        &user.sub,
        &event,
        today_utc(),
        state.profile_update_attempts,
    )
    .await?;

    Ok(Json(RecordResponse {
        success: true,
        reward,
    }))
}

/// The caller's activity ledger, newest first.
pub async fn list_activities(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ActivityRecord>>, ApiError> {
    Ok(Json(state.store.list_activities(&user.sub).await?))
}
