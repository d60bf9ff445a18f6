use haven_core::models::assessment::{AssessmentType, PerSubscale, SeverityLevel, Subscale};
use haven_instruments::definition::{QuestionnaireDefinition, ScoringRules, ranges};
use haven_instruments::error::ScoreError;
use haven_instruments::scoring::{UNANSWERED, completed_responses, score};
use haven_instruments::{Instrument, get_instrument};

fn definition(kind: AssessmentType) -> QuestionnaireDefinition {
    get_instrument(kind).definition().clone()
}

/// Spread `total` over `count` answers of at most 3 each.
fn spread(total: u32, count: usize) -> Vec<u32> {
    let mut remaining = total;
    (0..count)
        .map(|_| {
            let v = remaining.min(3);
            remaining -= v;
            v
        })
        .collect()
}

/// DASS-21 responses whose raw subscale sums equal `raw`.
fn dass_responses(definition: &QuestionnaireDefinition, raw: PerSubscale<u32>) -> Vec<u32> {
    let mut remaining = raw;
    definition
        .questions
        .iter()
        .map(|q| {
            let subscale = q.subscale.expect("DASS-21 questions are tagged");
            let left = remaining.get_mut(subscale);
            let v = (*left).min(3);
            *left -= v;
            v
        })
        .collect()
}

#[test]
fn phq9_total_of_14_is_moderate() {
    let def = definition(AssessmentType::Phq9);
    let result = score(&def, &spread(14, 9)).unwrap();

    assert_eq!(result.total, 14);
    assert_eq!(result.severity, SeverityLevel::Label("Moderate".to_string()));
    assert!(result.subscales.is_none());
}

#[test]
fn simple_instrument_uses_the_supplied_range_table() {
    let mut def = definition(AssessmentType::Phq9);
    def.scoring_rules = ScoringRules::Simple {
        ranges: ranges(&[
            (0, 4, "Minimal", "a"),
            (5, 9, "Mild", "b"),
            (10, 14, "Moderate", "c"),
            (15, 19, "Moderately Severe", "d"),
            (20, 27, "Severe", "e"),
        ]),
    };

    let result = score(&def, &[3, 3, 2, 2, 1, 1, 1, 1, 0]).unwrap();
    assert_eq!(result.total, 14);
    assert_eq!(result.severity.describe(), "Moderate");
    assert_eq!(result.interpretation, "c");
}

#[test]
fn range_boundaries_are_inclusive() {
    let def = definition(AssessmentType::Gad7);
    let level = |total| score(&def, &spread(total, 7)).unwrap().severity.describe();

    assert_eq!(level(0), "Minimal");
    assert_eq!(level(4), "Minimal");
    assert_eq!(level(5), "Mild");
    assert_eq!(level(9), "Mild");
    assert_eq!(level(10), "Moderate");
    assert_eq!(level(15), "Severe");
    assert_eq!(level(21), "Severe");
}

#[test]
fn dass21_scores_each_subscale_independently() {
    let mut def = definition(AssessmentType::Dass21);
    if let ScoringRules::Composite { subscales } = &mut def.scoring_rules {
        subscales.stress.ranges = ranges(&[
            (0, 10, "Normal", ""),
            (11, 18, "Mild", ""),
            (19, 25, "Moderate", ""),
            (26, 33, "Severe", ""),
            (34, 42, "Extremely Severe", ""),
        ]);
    }
    let responses = dass_responses(
        &def,
        PerSubscale {
            depression: 10,
            anxiety: 4,
            stress: 6,
        },
    );

    let result = score(&def, &responses).unwrap();
    let breakdown = result.subscales.clone().unwrap();

    assert_eq!(
        breakdown.scores,
        PerSubscale {
            depression: 20,
            anxiety: 8,
            stress: 12,
        }
    );
    assert_eq!(result.total, 40);
    assert_eq!(
        result.interpretation,
        "Depression: Moderate, Anxiety: Mild, Stress: Mild"
    );
}

#[test]
fn dass21_builtin_cutoffs_follow_published_bands() {
    let def = definition(AssessmentType::Dass21);
    let responses = dass_responses(
        &def,
        PerSubscale {
            depression: 10,
            anxiety: 4,
            stress: 6,
        },
    );

    let result = score(&def, &responses).unwrap();
    assert_eq!(result.total, 40);
    assert_eq!(
        result.interpretation,
        "Depression: Moderate, Anxiety: Mild, Stress: Normal"
    );
    assert_eq!(
        result.severity,
        SeverityLevel::Subscales(PerSubscale {
            depression: "Moderate".to_string(),
            anxiety: "Mild".to_string(),
            stress: "Normal".to_string(),
        })
    );
}

#[test]
fn dass21_subscale_sums_partition_the_responses() {
    let def = definition(AssessmentType::Dass21);

    for seed in 0u32..200 {
        let responses: Vec<u32> = (0..21u32)
            .map(|i| (seed.wrapping_mul(7) + i * i * 3 + seed / 3) % 4)
            .collect();

        let mut grouped = PerSubscale::<u32>::default();
        for (q, v) in def.questions.iter().zip(&responses) {
            *grouped.get_mut(q.subscale.unwrap()) += v;
        }

        let result = score(&def, &responses).unwrap();
        let breakdown = result.subscales.unwrap();

        assert_eq!(breakdown.raw, grouped, "seed {seed}");
        for subscale in Subscale::ALL {
            assert_eq!(*breakdown.scores.get(subscale), grouped.get(subscale) * 2);
        }
        let sum: u32 = breakdown.scores.iter().map(|(_, s)| *s).sum();
        assert_eq!(result.total, sum);
    }
}

#[test]
fn unanswered_questions_block_submission() {
    let def = definition(AssessmentType::Gad7);
    let err = completed_responses(&def, &[1, 2, UNANSWERED, 0, 0, 1, 2]).unwrap_err();
    assert_eq!(err, ScoreError::Unanswered { index: 2 });
    assert_eq!(err.to_string(), "question 3 is unanswered");
}

#[test]
fn response_count_must_match_questions() {
    let def = definition(AssessmentType::Phq9);
    assert_eq!(
        completed_responses(&def, &[0, 1, 2]).unwrap_err(),
        ScoreError::ResponseCount {
            expected: 9,
            actual: 3,
        }
    );
    assert_eq!(
        score(&def, &[0; 10]).unwrap_err(),
        ScoreError::ResponseCount {
            expected: 9,
            actual: 10,
        }
    );
}

#[test]
fn responses_must_be_scale_points() {
    let def = definition(AssessmentType::Gad7);
    assert_eq!(
        completed_responses(&def, &[0, 4, 0, 0, 0, 0, 0]).unwrap_err(),
        ScoreError::InvalidResponse { index: 1, value: 4 }
    );
    assert_eq!(
        completed_responses(&def, &[0, 0, 0, 0, 0, 0, -3]).unwrap_err(),
        ScoreError::InvalidResponse {
            index: 6,
            value: -3,
        }
    );
    assert_eq!(
        score(&def, &[0, 0, 0, 7, 0, 0, 0]).unwrap_err(),
        ScoreError::InvalidResponse { index: 3, value: 7 }
    );
}

#[test]
fn completed_responses_round_into_scores() {
    let def = definition(AssessmentType::Gad7);
    let completed = completed_responses(&def, &[3, 3, 3, 3, 3, 0, 0]).unwrap();
    assert_eq!(completed, vec![3, 3, 3, 3, 3, 0, 0]);
    assert_eq!(
        get_instrument(AssessmentType::Gad7)
            .score(&completed)
            .unwrap()
            .severity
            .describe(),
        "Severe"
    );
}

#[test]
fn malformed_table_reports_unmapped_score() {
    let mut def = definition(AssessmentType::Phq9);
    def.scoring_rules = ScoringRules::Simple {
        ranges: ranges(&[(0, 9, "Low", ""), (20, 27, "High", "")]),
    };

    let err = score(&def, &spread(14, 9)).unwrap_err();
    assert_eq!(
        err,
        ScoreError::UnmappedScore {
            score: 14,
            subscale: None,
        }
    );
}
