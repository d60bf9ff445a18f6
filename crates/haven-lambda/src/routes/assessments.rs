use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use haven_core::models::assessment::{AssessmentResult, AssessmentType};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::assessments::{self, Submission};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitBody {
    /// One entry per question; `-1` marks an unanswered question.
    responses: Vec<i64>,
}

pub async fn submit_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(kind): Path<String>,
    payload: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<Json<Submission>, ApiError> {
    let kind: AssessmentType = kind
        .parse()
        .map_err(|_| ApiError::NotFound(format!("instrument not found: {kind}")))?;
    let Json(body) = payload?;

    let submission = assessments::submit(&state, &user.sub, kind, &body.responses).await?;
    Ok(Json(submission))
}

pub async fn list_results(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AssessmentResult>>, ApiError> {
    Ok(Json(state.store.list_assessment_results(&user.sub).await?))
}

pub async fn get_result(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentResult>, ApiError> {
    state
        .store
        .get_assessment_result(&user.sub, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("assessment result not found: {id}")))
}
