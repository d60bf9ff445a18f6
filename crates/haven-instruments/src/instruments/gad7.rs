use haven_core::models::assessment::AssessmentType;

use crate::Instrument;
use crate::definition::{Question, QuestionnaireDefinition, ScoringRules, ranges};
use crate::instruments::FREQUENCY_SCALE;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
            std::sync::LazyLock::new(|| QuestionnaireDefinition {
                assessment_type: AssessmentType::Gad7,
                name: "Generalized Anxiety Disorder Scale (GAD-7)".to_string(),
                questions: [
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ]
                .into_iter()
                .map(Question::new)
                .collect(),
                scale: FREQUENCY_SCALE.iter().map(|s| s.to_string()).collect(),
                points: vec![0, 1, 2, 3],
                scoring_rules: ScoringRules::Simple {
                    ranges: ranges(&[
                        (0, 4, "Minimal", "Minimal anxiety symptoms."),
                        (5, 9, "Mild", "Mild anxiety symptoms. Monitor and repeat the screen in a few weeks."),
                        (10, 14, "Moderate", "Moderate anxiety symptoms. Consider talking with a healthcare provider."),
                        (15, 21, "Severe", "Severe anxiety symptoms. Please reach out to a mental health professional promptly."),
                    ]),
                },
            });
        &DEFINITION
    }
}
