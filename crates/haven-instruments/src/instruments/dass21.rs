use haven_core::models::assessment::{AssessmentType, PerSubscale, Subscale};

use crate::Instrument;
use crate::definition::{Question, QuestionnaireDefinition, ScoringRules, SubscaleRule, ranges};

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// 21 items rated 0–3 over the past week, seven per subscale. Each subscale
/// sum is doubled to match the full DASS-42 scale, giving 0–42 per subscale.
pub struct Dass21;

impl Instrument for Dass21 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
            std::sync::LazyLock::new(|| {
                use Subscale::{Anxiety, Depression, Stress};

                let items = [
                    ("I found it hard to wind down", Stress),
                    ("I was aware of dryness of my mouth", Anxiety),
                    ("I couldn't seem to experience any positive feeling at all", Depression),
                    ("I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)", Anxiety),
                    ("I found it difficult to work up the initiative to do things", Depression),
                    ("I tended to over-react to situations", Stress),
                    ("I experienced trembling (e.g. in the hands)", Anxiety),
                    ("I felt that I was using a lot of nervous energy", Stress),
                    ("I was worried about situations in which I might panic and make a fool of myself", Anxiety),
                    ("I felt that I had nothing to look forward to", Depression),
                    ("I found myself getting agitated", Stress),
                    ("I found it difficult to relax", Stress),
                    ("I felt down-hearted and blue", Depression),
                    ("I was intolerant of anything that kept me from getting on with what I was doing", Stress),
                    ("I felt I was close to panic", Anxiety),
                    ("I was unable to become enthusiastic about anything", Depression),
                    ("I felt I wasn't worth much as a person", Depression),
                    ("I felt that I was rather touchy", Stress),
                    ("I was aware of the action of my heart in the absence of physical exertion (e.g. sense of heart rate increase, heart missing a beat)", Anxiety),
                    ("I felt scared without any good reason", Anxiety),
                    ("I felt that life was meaningless", Depression),
                ];

                QuestionnaireDefinition {
                    assessment_type: AssessmentType::Dass21,
                    name: "Depression Anxiety Stress Scales (DASS-21)".to_string(),
                    questions: items
                        .iter()
                        .map(|(text, subscale)| Question::tagged(text, *subscale))
                        .collect(),
                    scale: vec![
                        "Did not apply to me at all".to_string(),
                        "Applied to me to some degree, or some of the time".to_string(),
                        "Applied to me to a considerable degree, or a good part of time".to_string(),
                        "Applied to me very much, or most of the time".to_string(),
                    ],
                    points: vec![0, 1, 2, 3],
                    scoring_rules: ScoringRules::Composite {
                        subscales: PerSubscale {
                            depression: SubscaleRule {
                                multiplier: 2,
                                ranges: ranges(&[
                                    (0, 9, "Normal", "Depression symptoms are within the normal range."),
                                    (10, 13, "Mild", "Mild depression symptoms."),
                                    (14, 20, "Moderate", "Moderate depression symptoms."),
                                    (21, 27, "Severe", "Severe depression symptoms."),
                                    (28, 42, "Extremely Severe", "Extremely severe depression symptoms."),
                                ]),
                            },
                            anxiety: SubscaleRule {
                                multiplier: 2,
                                ranges: ranges(&[
                                    (0, 7, "Normal", "Anxiety symptoms are within the normal range."),
                                    (8, 9, "Mild", "Mild anxiety symptoms."),
                                    (10, 14, "Moderate", "Moderate anxiety symptoms."),
                                    (15, 19, "Severe", "Severe anxiety symptoms."),
                                    (20, 42, "Extremely Severe", "Extremely severe anxiety symptoms."),
                                ]),
                            },
                            // Published DASS cutoffs: a doubled stress score of
                            // 12 is Normal. Deployments with a stricter table
                            // supply their own definition.
                            stress: SubscaleRule {
                                multiplier: 2,
                                ranges: ranges(&[
                                    (0, 14, "Normal", "Stress is within the normal range."),
                                    (15, 18, "Mild", "Mild stress."),
                                    (19, 25, "Moderate", "Moderate stress."),
                                    (26, 33, "Severe", "Severe stress."),
                                    (34, 42, "Extremely Severe", "Extremely severe stress."),
                                ]),
                            },
                        },
                    },
                }
            });
        &DEFINITION
    }
}
