use std::collections::HashMap;

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use haven_core::models::badge::{Badge, BadgeState};
use haven_gamification::badges::badge_state;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::rewards::badge_catalog;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeView {
    #[serde(flatten)]
    badge: Badge,
    state: BadgeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    earned_at: Option<jiff::Timestamp>,
}

pub async fn list_badges(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<BadgeView>>, ApiError> {
    let catalog = badge_catalog(state.store.as_ref()).await?;
    let total_points = state
        .store
        .get_profile(&user.sub)
        .await?
        .map(|(profile, _)| profile.total_points)
        .unwrap_or(0);
    let earned: HashMap<String, jiff::Timestamp> = state
        .store
        .list_user_badges(&user.sub)
        .await?
        .into_iter()
        .map(|b| (b.badge_id, b.earned_at))
        .collect();

    let views = catalog
        .into_iter()
        .map(|badge| {
            let earned_at = earned.get(&badge.id).copied();
            BadgeView {
                state: badge_state(&badge, total_points, earned_at.is_some()),
                earned_at,
                badge,
            }
        })
        .collect();
    Ok(Json(views))
}
