use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use haven_core::models::assessment::AssessmentType;
use haven_instruments::definition::QuestionnaireDefinition;
use haven_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSummary {
    #[serde(rename = "type")]
    assessment_type: AssessmentType,
    name: String,
    question_count: usize,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            assessment_type: i.kind(),
            name: i.name().to_string(),
            question_count: i.definition().questions.len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(kind): Path<String>,
) -> Result<Json<QuestionnaireDefinition>, ApiError> {
    let kind: AssessmentType = kind
        .parse()
        .map_err(|_| ApiError::NotFound(format!("instrument not found: {kind}")))?;

    Ok(Json(get_instrument(kind).definition().clone()))
}
