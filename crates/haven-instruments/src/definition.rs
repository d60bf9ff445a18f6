use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haven_core::models::assessment::{AssessmentType, PerSubscale, Subscale};

/// A contiguous score interval mapped to a named severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityRange {
    pub min: u32,
    pub max: u32,
    pub level: String,
    pub interpretation: String,
}

impl SeverityRange {
    /// Inclusive on both ends.
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Scoring rules for one DASS-21 subscale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleRule {
    /// Raw subscale sum × multiplier = final subscale score.
    pub multiplier: u32,
    pub ranges: Vec<SeverityRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRules {
    /// Total = sum of responses, one range table.
    Simple { ranges: Vec<SeverityRange> },
    /// Per-subscale sums, each multiplied and banded independently.
    Composite { subscales: PerSubscale<SubscaleRule> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscale: Option<Subscale>,
}

impl Question {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            subscale: None,
        }
    }

    pub fn tagged(text: &str, subscale: Subscale) -> Self {
        Self {
            text: text.to_string(),
            subscale: Some(subscale),
        }
    }
}

/// A complete questionnaire: what is asked, how it is answered, how it is
/// scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionnaireDefinition {
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub name: String,
    pub questions: Vec<Question>,
    /// Response labels, lowest to highest.
    pub scale: Vec<String>,
    /// Numeric value of each `scale` position.
    pub points: Vec<u32>,
    pub scoring_rules: ScoringRules,
}

impl QuestionnaireDefinition {
    pub fn is_composite(&self) -> bool {
        matches!(self.scoring_rules, ScoringRules::Composite { .. })
    }

    /// Highest value a single response can take.
    pub fn max_point(&self) -> u32 {
        self.points.iter().copied().max().unwrap_or(0)
    }

    pub fn questions_in(&self, subscale: Subscale) -> usize {
        self.questions
            .iter()
            .filter(|q| q.subscale == Some(subscale))
            .count()
    }

    /// Highest final score one subscale can reach under `multiplier`.
    pub fn subscale_max(&self, subscale: Subscale, multiplier: u32) -> u32 {
        self.questions_in(subscale) as u32 * self.max_point() * multiplier
    }

    /// Highest total this instrument can produce.
    pub fn max_possible_score(&self) -> u32 {
        match &self.scoring_rules {
            ScoringRules::Simple { .. } => self.questions.len() as u32 * self.max_point(),
            ScoringRules::Composite { subscales } => subscales
                .iter()
                .map(|(subscale, rule)| self.subscale_max(subscale, rule.multiplier))
                .sum(),
        }
    }
}

/// Build a range table from `(min, max, level, interpretation)` rows.
pub fn ranges(rows: &[(u32, u32, &str, &str)]) -> Vec<SeverityRange> {
    rows.iter()
        .map(|(min, max, level, interpretation)| SeverityRange {
            min: *min,
            max: *max,
            level: level.to_string(),
            interpretation: interpretation.to_string(),
        })
        .collect()
}
