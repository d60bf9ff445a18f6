use haven_core::models::assessment::{AssessmentType, Subscale};
use haven_instruments::bands::{band_index, find_band, validate_bands};
use haven_instruments::catalog::{validate_catalog, validate_definition};
use haven_instruments::definition::{Question, ScoringRules, ranges};
use haven_instruments::error::{BandError, CatalogError};
use haven_instruments::{Instrument, all_instruments, get_instrument};

#[test]
fn builtin_catalog_is_valid() {
    validate_catalog().unwrap();
    assert_eq!(all_instruments().len(), 3);
}

#[test]
fn every_possible_score_matches_exactly_one_range() {
    for instrument in all_instruments() {
        let def = instrument.definition();
        match &def.scoring_rules {
            ScoringRules::Simple { ranges } => {
                for s in 0..=def.max_possible_score() {
                    let hits = ranges.iter().filter(|r| r.contains(s)).count();
                    assert_eq!(hits, 1, "{} score {s}", def.assessment_type);
                    assert!(find_band(ranges, s).is_some());
                }
            }
            ScoringRules::Composite { subscales } => {
                for (subscale, rule) in subscales.iter() {
                    for s in 0..=def.subscale_max(subscale, rule.multiplier) {
                        let hits = rule.ranges.iter().filter(|r| r.contains(s)).count();
                        assert_eq!(hits, 1, "{subscale} score {s}");
                    }
                }
            }
        }
    }
}

#[test]
fn maximum_scores_match_the_instruments() {
    let max = |kind| get_instrument(kind).definition().max_possible_score();
    assert_eq!(max(AssessmentType::Phq9), 27);
    assert_eq!(max(AssessmentType::Gad7), 21);
    assert_eq!(max(AssessmentType::Dass21), 126);

    let dass = get_instrument(AssessmentType::Dass21);
    for subscale in Subscale::ALL {
        assert_eq!(dass.definition().questions_in(subscale), 7);
    }
}

#[test]
fn band_lookup_outside_the_table_is_none() {
    let table = ranges(&[(0, 4, "Low", ""), (5, 9, "High", "")]);
    assert_eq!(band_index(&table, 0), Some(0));
    assert_eq!(band_index(&table, 5), Some(1));
    assert_eq!(band_index(&table, 9), Some(1));
    assert_eq!(band_index(&table, 10), None);
    assert_eq!(band_index(&[], 0), None);
}

#[test]
fn gaps_and_overlaps_are_rejected() {
    let gap = ranges(&[(0, 4, "Low", ""), (6, 9, "High", "")]);
    assert_eq!(
        validate_bands(&gap, 9),
        Err(BandError::NotContiguous {
            index: 1,
            min: 6,
            expected: 5,
        })
    );

    let overlap = ranges(&[(0, 5, "Low", ""), (5, 9, "High", "")]);
    assert!(matches!(
        validate_bands(&overlap, 9),
        Err(BandError::NotContiguous { index: 1, .. })
    ));

    let short = ranges(&[(0, 4, "Low", ""), (5, 8, "High", "")]);
    assert_eq!(
        validate_bands(&short, 9),
        Err(BandError::EndMismatch {
            max: 8,
            expected: 9,
        })
    );

    let late = ranges(&[(1, 9, "Low", "")]);
    assert_eq!(
        validate_bands(&late, 9),
        Err(BandError::DoesNotStartAtZero { min: 1 })
    );

    assert_eq!(validate_bands(&[], 9), Err(BandError::Empty));

    let blank = ranges(&[(0, 9, " ", "")]);
    assert_eq!(validate_bands(&blank, 9), Err(BandError::BlankLevel { index: 0 }));
}

#[test]
fn definition_checks_catch_authoring_mistakes() {
    let mut def = get_instrument(AssessmentType::Phq9).definition().clone();
    def.points.pop();
    assert!(matches!(
        validate_definition(&def),
        Err(CatalogError::ScaleMismatch {
            labels: 4,
            points: 3,
            ..
        })
    ));

    let mut def = get_instrument(AssessmentType::Gad7).definition().clone();
    def.questions.push(Question::tagged("Extra", Subscale::Stress));
    assert!(matches!(
        validate_definition(&def),
        Err(CatalogError::SubscaleTagging { index: 7, .. })
    ));

    let mut def = get_instrument(AssessmentType::Gad7).definition().clone();
    def.points = vec![1, 2, 3, 4];
    assert!(matches!(
        validate_definition(&def),
        Err(CatalogError::InvalidPoints { .. })
    ));

    let mut def = get_instrument(AssessmentType::Dass21).definition().clone();
    if let ScoringRules::Composite { subscales } = &mut def.scoring_rules {
        subscales.anxiety.multiplier = 0;
    }
    assert!(matches!(
        validate_definition(&def),
        Err(CatalogError::ZeroMultiplier {
            subscale: Subscale::Anxiety,
            ..
        })
    ));

    let mut def = get_instrument(AssessmentType::Dass21).definition().clone();
    if let ScoringRules::Composite { subscales } = &mut def.scoring_rules {
        subscales.stress.multiplier = 1;
    }
    let err = validate_definition(&def).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::SubscaleRanges {
            subscale: Subscale::Stress,
            source: BandError::EndMismatch {
                max: 42,
                expected: 21,
            },
            ..
        }
    ));
    assert!(err.to_string().starts_with("DASS-21 Stress ranges"));
}

#[test]
fn definitions_serialize_with_wire_names() {
    let def = get_instrument(AssessmentType::Dass21).definition().clone();
    let json = serde_json::to_value(&def).unwrap();

    assert_eq!(json["type"], "DASS-21");
    assert_eq!(json["scoringRules"]["kind"], "composite");
    assert_eq!(json["scoringRules"]["subscales"]["depression"]["multiplier"], 2);
    assert_eq!(json["questions"][0]["subscale"], "stress");

    let phq = serde_json::to_value(get_instrument(AssessmentType::Phq9).definition()).unwrap();
    assert!(phq["questions"][0].get("subscale").is_none());
}
