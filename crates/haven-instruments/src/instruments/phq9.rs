use haven_core::models::assessment::AssessmentType;

use crate::Instrument;
use crate::definition::{Question, QuestionnaireDefinition, ScoringRules, ranges};
use crate::instruments::FREQUENCY_SCALE;

/// PHQ-9: Patient Health Questionnaire.
/// 9 items, each rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
            std::sync::LazyLock::new(|| QuestionnaireDefinition {
                assessment_type: AssessmentType::Phq9,
                name: "Patient Health Questionnaire (PHQ-9)".to_string(),
                questions: [
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ]
                .into_iter()
                .map(Question::new)
                .collect(),
                scale: FREQUENCY_SCALE.iter().map(|s| s.to_string()).collect(),
                points: vec![0, 1, 2, 3],
                scoring_rules: ScoringRules::Simple {
                    ranges: ranges(&[
                        (0, 4, "Minimal", "Minimal or no depressive symptoms."),
                        (5, 9, "Mild", "Mild depressive symptoms. Watchful waiting and a repeat screen are reasonable."),
                        (10, 14, "Moderate", "Moderate depressive symptoms. Consider talking with a healthcare provider."),
                        (15, 19, "Moderately Severe", "Moderately severe depressive symptoms. Professional support is recommended."),
                        (20, 27, "Severe", "Severe depressive symptoms. Please reach out to a mental health professional promptly."),
                    ]),
                },
            });
        &DEFINITION
    }
}
