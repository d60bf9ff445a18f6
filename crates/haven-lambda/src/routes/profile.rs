use axum::extract::State;
use axum::{Extension, Json};

use haven_core::models::profile::GamificationProfile;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The caller's profile; zeroed if they have never recorded an activity.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<GamificationProfile>, ApiError> {
    let profile = state
        .store
        .get_profile(&user.sub)
        .await?
        .map(|(profile, _)| profile)
        .unwrap_or_default();
    Ok(Json(profile))
}
