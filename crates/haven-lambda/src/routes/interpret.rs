use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use haven_core::models::assessment::NarrativeSource;
use haven_instruments::request::{InterpretRequestBody, validate};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InterpretResponse {
    success: bool,
    interpretation: String,
    source: NarrativeSource,
}

/// Interpret an already-scored assessment. Completion failures never reach
/// the caller; they show up as `source: "fallback"`.
pub async fn interpret(
    State(state): State<AppState>,
    payload: Result<Json<InterpretRequestBody>, JsonRejection>,
) -> Result<Json<InterpretResponse>, ApiError> {
    let Json(body) = payload?;
    let request = validate(&body)?;

    let interpretation = state.interpreter.interpret(&request).await;

    Ok(Json(InterpretResponse {
        success: true,
        interpretation: interpretation.text,
        source: interpretation.source,
    }))
}
