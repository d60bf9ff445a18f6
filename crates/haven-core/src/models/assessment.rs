use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A supported clinical questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AssessmentType {
    #[serde(rename = "DASS-21")]
    Dass21,
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 3] = [Self::Dass21, Self::Phq9, Self::Gad7];

    /// Wire identifier, e.g. `"PHQ-9"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dass21 => "DASS-21",
            Self::Phq9 => "PHQ-9",
            Self::Gad7 => "GAD-7",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    /// Case-insensitive so that path segments like `phq-9` resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownAssessmentType(s.to_string()))
    }
}

/// One independently scored dimension of a composite instrument (DASS-21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    Depression,
    Anxiety,
    Stress,
}

impl Subscale {
    /// Reporting order used in interpretations: depression, anxiety, stress.
    pub const ALL: [Subscale; 3] = [Self::Depression, Self::Anxiety, Self::Stress];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
            Self::Stress => "Stress",
        }
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subscale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sub| sub.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSubscale(s.to_string()))
    }
}

/// A value held once per subscale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct PerSubscale<T> {
    pub depression: T,
    pub anxiety: T,
    pub stress: T,
}

impl<T> PerSubscale<T> {
    pub fn from_fn(mut f: impl FnMut(Subscale) -> T) -> Self {
        Self {
            depression: f(Subscale::Depression),
            anxiety: f(Subscale::Anxiety),
            stress: f(Subscale::Stress),
        }
    }

    pub fn get(&self, subscale: Subscale) -> &T {
        match subscale {
            Subscale::Depression => &self.depression,
            Subscale::Anxiety => &self.anxiety,
            Subscale::Stress => &self.stress,
        }
    }

    pub fn get_mut(&mut self, subscale: Subscale) -> &mut T {
        match subscale {
            Subscale::Depression => &mut self.depression,
            Subscale::Anxiety => &mut self.anxiety,
            Subscale::Stress => &mut self.stress,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Subscale, &T) -> U) -> PerSubscale<U> {
        PerSubscale::from_fn(|s| f(s, self.get(s)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subscale, &T)> {
        Subscale::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Severity outcome of a scored assessment.
///
/// Simple instruments carry a single band label; composite instruments carry
/// one label per subscale. Serialized untagged, so the wire shape is either a
/// string or a `{ depression, anxiety, stress }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum SeverityLevel {
    Label(String),
    Subscales(PerSubscale<String>),
}

impl SeverityLevel {
    /// Human-readable form: the label itself, or
    /// `"Depression: X, Anxiety: Y, Stress: Z"`.
    pub fn describe(&self) -> String {
        match self {
            Self::Label(label) => label.clone(),
            Self::Subscales(levels) => levels
                .iter()
                .map(|(subscale, level)| format!("{}: {level}", subscale.label()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Label(label) => label.trim().is_empty(),
            Self::Subscales(levels) => levels.iter().any(|(_, l)| l.trim().is_empty()),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Where the narrative attached to a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NarrativeSource {
    /// Produced by the text-completion service.
    Generated,
    /// Deterministic template used when the service was unavailable.
    Fallback,
}

/// A submitted, scored and interpreted assessment. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub user_id: String,
    pub assessment_type: AssessmentType,
    pub responses: Vec<u32>,
    pub total_score: u32,
    pub severity_level: SeverityLevel,
    /// Final (multiplied) subscale scores; composite instruments only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscale_scores: Option<PerSubscale<u32>>,
    pub interpretation: String,
    pub narrative: String,
    pub narrative_source: NarrativeSource,
    pub created_at: jiff::Timestamp,
}
