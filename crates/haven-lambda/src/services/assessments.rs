use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use haven_audit::events::{AuditAction, AuditEvent};
use haven_core::models::activity::ActivityEvent;
use haven_core::models::assessment::{AssessmentResult, AssessmentType};
use haven_gamification::activity::ActivityKind;
use haven_instruments::get_instrument;
use haven_instruments::request::InterpretRequest;
use haven_instruments::scoring::completed_responses;

use crate::error::ApiError;
use crate::services::rewards::{self, Reward};
use crate::services::today_utc;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub result: AssessmentResult,
    /// `None` when the result was stored but the points could not be.
    pub reward: Option<Reward>,
}

/// Score, interpret and store one completed questionnaire, then award the
/// assessment activity.
///
/// Nothing is written unless scoring succeeds. A reward failure after the
/// result is stored is logged and reported as `reward: None`.
pub async fn submit(
    state: &AppState,
    user_id: &str,
    kind: AssessmentType,
    responses: &[i64],
) -> Result<Submission, ApiError> {
    let instrument = get_instrument(kind);
    let definition = instrument.definition();

    let responses = completed_responses(definition, responses)?;
    let scored = instrument.score(&responses)?;

    let subscale_scores = scored.subscales.as_ref().map(|s| s.scores);
    let interpretation = state
        .interpreter
        .interpret(&InterpretRequest {
            assessment_type: kind,
            total_score: f64::from(scored.total),
            severity_level: scored.severity.clone(),
            subscales: subscale_scores,
        })
        .await;

    let result = AssessmentResult {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        assessment_type: kind,
        responses,
        total_score: scored.total,
        severity_level: scored.severity,
        subscale_scores,
        interpretation: scored.interpretation,
        narrative: interpretation.text,
        narrative_source: interpretation.source,
        created_at: jiff::Timestamp::now(),
    };
    state.store.insert_assessment_result(&result).await?;

    AuditEvent::new(
        AuditAction::AssessmentResultCreate,
        result.id.to_string(),
        user_id,
    )
    .with_details(serde_json::json!({
        "assessmentType": kind.as_str(),
        "narrativeSource": result.narrative_source,
    }))
    .emit();
    info!(
        user_id = %user_id,
        assessment_type = %kind,
        total_score = result.total_score,
        "assessment result stored"
    );

    let event = ActivityEvent {
        activity_type: ActivityKind::Assessment.as_str().to_string(),
        points_earned: ActivityKind::Assessment.default_points(),
    };
    let reward = match rewards::record(
        state.store.as_ref(),
        user_id,
        &event,
        today_utc(),
        state.profile_update_attempts,
    )
    .await
    {
        Ok(reward) => Some(reward),
        Err(e) => {
            warn!(
                user_id = %user_id,
                result_id = %result.id,
                error = %e,
                "assessment stored but reward failed"
            );
            None
        }
    };

    Ok(Submission { result, reward })
}
