//! Validation for the interpretation-request boundary.
//!
//! The body is accepted loosely (every field as raw JSON) so that a bad field
//! is reported by name instead of as a generic deserialization failure.

use serde::Deserialize;
use thiserror::Error;

use haven_core::models::assessment::{AssessmentType, PerSubscale, SeverityLevel};

/// Highest `totalScore` the boundary accepts.
pub const MAX_TOTAL_SCORE: f64 = 100.0;

/// Raw request body as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequestBody {
    #[serde(default)]
    pub assessment_type: Option<serde_json::Value>,
    #[serde(default)]
    pub total_score: Option<serde_json::Value>,
    #[serde(default)]
    pub severity_level: Option<serde_json::Value>,
    #[serde(default)]
    pub subscales: Option<serde_json::Value>,
}

/// A request that passed [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretRequest {
    pub assessment_type: AssessmentType,
    pub total_score: f64,
    pub severity_level: SeverityLevel,
    pub subscales: Option<PerSubscale<u32>>,
}

/// First failing field of an interpretation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("assessmentType is required")]
    MissingAssessmentType,

    #[error("assessmentType must be one of DASS-21, PHQ-9, GAD-7")]
    UnknownAssessmentType,

    #[error("totalScore is required")]
    MissingTotalScore,

    #[error("totalScore must be a number between 0 and 100")]
    InvalidTotalScore,

    #[error("severityLevel is required")]
    MissingSeverityLevel,

    #[error("severityLevel must be a string or a depression/anxiety/stress object")]
    InvalidSeverityLevel,

    #[error("subscales must be an object with depression, anxiety and stress scores")]
    InvalidSubscales,
}

impl RequestError {
    /// Name of the offending field, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingAssessmentType | Self::UnknownAssessmentType => "assessmentType",
            Self::MissingTotalScore | Self::InvalidTotalScore => "totalScore",
            Self::MissingSeverityLevel | Self::InvalidSeverityLevel => "severityLevel",
            Self::InvalidSubscales => "subscales",
        }
    }
}

/// Check fields in order: assessmentType, totalScore, severityLevel,
/// subscales. Stops at the first failure.
pub fn validate(body: &InterpretRequestBody) -> Result<InterpretRequest, RequestError> {
    let assessment_type = match present(&body.assessment_type) {
        None => return Err(RequestError::MissingAssessmentType),
        Some(value) => value
            .as_str()
            .and_then(|s| s.parse::<AssessmentType>().ok())
            .ok_or(RequestError::UnknownAssessmentType)?,
    };

    let total_score = match present(&body.total_score) {
        None => return Err(RequestError::MissingTotalScore),
        Some(value) => value
            .as_f64()
            .filter(|s| s.is_finite() && (0.0..=MAX_TOTAL_SCORE).contains(s))
            .ok_or(RequestError::InvalidTotalScore)?,
    };

    let severity_level = match present(&body.severity_level) {
        None => return Err(RequestError::MissingSeverityLevel),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => {
            return Err(RequestError::MissingSeverityLevel);
        }
        Some(serde_json::Value::String(s)) => SeverityLevel::Label(s.trim().to_string()),
        Some(value @ serde_json::Value::Object(_)) => {
            let levels: PerSubscale<String> = serde_json::from_value(value.clone())
                .map_err(|_| RequestError::InvalidSeverityLevel)?;
            let level = SeverityLevel::Subscales(levels);
            if level.is_blank() {
                return Err(RequestError::InvalidSeverityLevel);
            }
            level
        }
        Some(_) => return Err(RequestError::InvalidSeverityLevel),
    };

    let subscales = match present(&body.subscales) {
        None => None,
        Some(value) => Some(
            serde_json::from_value::<PerSubscale<u32>>(value.clone())
                .map_err(|_| RequestError::InvalidSubscales)?,
        ),
    };

    Ok(InterpretRequest {
        assessment_type,
        total_score,
        severity_level,
        subscales,
    })
}

/// Treat JSON `null` the same as an absent field.
fn present(value: &Option<serde_json::Value>) -> Option<&serde_json::Value> {
    value.as_ref().filter(|v| !v.is_null())
}
