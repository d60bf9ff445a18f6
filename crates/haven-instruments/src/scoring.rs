use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haven_core::models::assessment::{PerSubscale, SeverityLevel};

use crate::bands::find_band;
use crate::definition::{QuestionnaireDefinition, ScoringRules};
use crate::error::ScoreError;

/// Marks a question the user has not answered yet.
pub const UNANSWERED: i64 = -1;

/// Per-subscale detail of a composite score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscaleBreakdown {
    /// Sum of responses tagged with each subscale, before the multiplier.
    pub raw: PerSubscale<u32>,
    /// Final subscale scores (raw × multiplier).
    pub scores: PerSubscale<u32>,
    pub levels: PerSubscale<String>,
}

/// Outcome of scoring one completed response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub total: u32,
    pub severity: SeverityLevel,
    /// Band narrative for simple instruments; `"Depression: X, Anxiety: Y,
    /// Stress: Z"` for composite ones.
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscales: Option<SubscaleBreakdown>,
}

/// Turn an in-progress response vector into a completed one.
///
/// Fails on a length mismatch, on any [`UNANSWERED`] sentinel, and on any
/// value that is not one of the instrument's point values.
pub fn completed_responses(
    definition: &QuestionnaireDefinition,
    responses: &[i64],
) -> Result<Vec<u32>, ScoreError> {
    check_count(definition, responses.len())?;

    responses
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value == UNANSWERED {
                return Err(ScoreError::Unanswered { index });
            }
            u32::try_from(value)
                .ok()
                .filter(|v| definition.points.contains(v))
                .ok_or(ScoreError::InvalidResponse { index, value })
        })
        .collect()
}

/// Score a completed response set.
pub fn score(
    definition: &QuestionnaireDefinition,
    responses: &[u32],
) -> Result<ScoreResult, ScoreError> {
    check_count(definition, responses.len())?;
    if let Some((index, &value)) = responses
        .iter()
        .enumerate()
        .find(|(_, v)| !definition.points.contains(*v))
    {
        return Err(ScoreError::InvalidResponse {
            index,
            value: i64::from(value),
        });
    }

    match &definition.scoring_rules {
        ScoringRules::Simple { ranges } => {
            let total: u32 = responses.iter().sum();
            let band = find_band(ranges, total).ok_or(ScoreError::UnmappedScore {
                score: total,
                subscale: None,
            })?;

            Ok(ScoreResult {
                total,
                severity: SeverityLevel::Label(band.level.clone()),
                interpretation: band.interpretation.clone(),
                subscales: None,
            })
        }
        ScoringRules::Composite { subscales } => {
            let mut raw = PerSubscale::<u32>::default();
            for (question, value) in definition.questions.iter().zip(responses) {
                if let Some(subscale) = question.subscale {
                    *raw.get_mut(subscale) += value;
                }
            }

            let scores = raw.map(|subscale, sum| sum * subscales.get(subscale).multiplier);

            let mut levels = PerSubscale::<String>::default();
            for (subscale, &subscale_score) in scores.iter() {
                let band = find_band(&subscales.get(subscale).ranges, subscale_score).ok_or(
                    ScoreError::UnmappedScore {
                        score: subscale_score,
                        subscale: Some(subscale),
                    },
                )?;
                *levels.get_mut(subscale) = band.level.clone();
            }

            let total = scores.iter().map(|(_, s)| s).sum();
            let severity = SeverityLevel::Subscales(levels.clone());

            Ok(ScoreResult {
                total,
                interpretation: severity.describe(),
                severity,
                subscales: Some(SubscaleBreakdown {
                    raw,
                    scores,
                    levels,
                }),
            })
        }
    }
}

fn check_count(definition: &QuestionnaireDefinition, actual: usize) -> Result<(), ScoreError> {
    let expected = definition.questions.len();
    if actual != expected {
        return Err(ScoreError::ResponseCount { expected, actual });
    }
    Ok(())
}
