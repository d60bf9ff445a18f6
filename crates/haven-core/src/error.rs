use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown assessment type: {0}")]
    UnknownAssessmentType(String),

    #[error("unknown subscale: {0}")]
    UnknownSubscale(String),
}
