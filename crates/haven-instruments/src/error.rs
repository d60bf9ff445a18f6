use thiserror::Error;

use haven_core::models::assessment::{AssessmentType, Subscale};

/// Structural defect in one severity range table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("no ranges defined")]
    Empty,

    #[error("range {index} has min {min} greater than max {max}")]
    Inverted { index: usize, min: u32, max: u32 },

    #[error("range {index} has a blank level")]
    BlankLevel { index: usize },

    #[error("first range starts at {min}, expected 0")]
    DoesNotStartAtZero { min: u32 },

    #[error("range {index} starts at {min}, expected {expected}")]
    NotContiguous { index: usize, min: u32, expected: u32 },

    #[error("last range ends at {max}, expected {expected}")]
    EndMismatch { max: u32, expected: u32 },
}

/// Authoring defect in a questionnaire definition, found at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{assessment_type}: {labels} response labels but {points} point values")]
    ScaleMismatch {
        assessment_type: AssessmentType,
        labels: usize,
        points: usize,
    },

    #[error("{assessment_type}: point values must start at 0 and strictly increase")]
    InvalidPoints { assessment_type: AssessmentType },

    #[error("{assessment_type}: has no questions")]
    NoQuestions { assessment_type: AssessmentType },

    #[error("{assessment_type}: question {} subscale tag does not match the scoring rules", index + 1)]
    SubscaleTagging {
        assessment_type: AssessmentType,
        index: usize,
    },

    #[error("{assessment_type}: {subscale} has no questions")]
    EmptySubscale {
        assessment_type: AssessmentType,
        subscale: Subscale,
    },

    #[error("{assessment_type}: {subscale} multiplier must be positive")]
    ZeroMultiplier {
        assessment_type: AssessmentType,
        subscale: Subscale,
    },

    #[error("{assessment_type} ranges: {source}")]
    Ranges {
        assessment_type: AssessmentType,
        source: BandError,
    },

    #[error("{assessment_type} {subscale} ranges: {source}")]
    SubscaleRanges {
        assessment_type: AssessmentType,
        subscale: Subscale,
        source: BandError,
    },

    #[error("{assessment_type}: defined more than once")]
    Duplicate { assessment_type: AssessmentType },
}

/// A response set that cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("expected {expected} responses, got {actual}")]
    ResponseCount { expected: usize, actual: usize },

    #[error("question {} is unanswered", index + 1)]
    Unanswered { index: usize },

    #[error("question {}: {value} is not a valid response", index + 1)]
    InvalidResponse { index: usize, value: i64 },

    /// The computed score matched no range. Indicates a malformed catalog.
    #[error("score {score} does not fall in any severity range")]
    UnmappedScore {
        score: u32,
        subscale: Option<Subscale>,
    },
}
