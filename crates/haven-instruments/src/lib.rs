//! haven-instruments
//!
//! Clinical questionnaire definitions and the rules that score them.
//! Pure data and pure functions, no AWS dependency. Covers DASS-21, PHQ-9
//! and GAD-7: response validation, raw and subscale sums, severity band
//! lookup, load-time catalog checks and the offline interpretation text.

pub mod bands;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod fallback;
pub mod instruments;
pub mod request;
pub mod scoring;

use haven_core::models::assessment::{AssessmentType, PerSubscale, SeverityLevel};

use definition::QuestionnaireDefinition;
use error::ScoreError;
use scoring::ScoreResult;

/// Trait implemented by each supported questionnaire.
pub trait Instrument: Send + Sync {
    /// The static definition: questions, response scale and scoring rules.
    fn definition(&self) -> &QuestionnaireDefinition;

    fn kind(&self) -> AssessmentType {
        self.definition().assessment_type
    }

    /// Human-readable name (e.g., "Patient Health Questionnaire (PHQ-9)").
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Score a completed response set against this instrument's rules.
    fn score(&self, responses: &[u32]) -> Result<ScoreResult, ScoreError> {
        scoring::score(self.definition(), responses)
    }

    /// Format a scored outcome as structured text for inclusion in a
    /// completion prompt.
    fn to_structured_input(
        &self,
        total_score: f64,
        severity: &SeverityLevel,
        subscales: Option<&PerSubscale<u32>>,
    ) -> String {
        let definition = self.definition();
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!(
            "- Total score: {total_score} (maximum {})\n",
            definition.max_possible_score()
        ));
        output.push_str(&format!("- Severity: {}\n", severity.describe()));

        if let Some(scores) = subscales {
            output.push_str("\n### Subscales\n");
            for (subscale, score) in scores.iter() {
                let level = match severity {
                    SeverityLevel::Subscales(levels) => format!(" ({})", levels.get(subscale)),
                    SeverityLevel::Label(_) => String::new(),
                };
                output.push_str(&format!("- {}: {score}{level}\n", subscale.label()));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::dass21::Dass21),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by assessment type.
pub fn get_instrument(kind: AssessmentType) -> Box<dyn Instrument> {
    match kind {
        AssessmentType::Dass21 => Box::new(instruments::dass21::Dass21),
        AssessmentType::Phq9 => Box::new(instruments::phq9::Phq9),
        AssessmentType::Gad7 => Box::new(instruments::gad7::Gad7),
    }
}
