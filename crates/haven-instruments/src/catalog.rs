//! Load-time checks over questionnaire definitions.
//!
//! Scoring trusts its range tables: lookup is a binary search that assumes a
//! sorted partition of `[0, max]`. Everything that assumption rests on is
//! verified here once, before any request is served.

use std::collections::HashSet;

use haven_core::models::assessment::Subscale;

use crate::all_instruments;
use crate::bands::validate_bands;
use crate::definition::{QuestionnaireDefinition, ScoringRules};
use crate::error::CatalogError;

/// Validate every registered instrument.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let instruments = all_instruments();
    let mut seen = HashSet::new();
    for instrument in &instruments {
        let definition = instrument.definition();
        if !seen.insert(definition.assessment_type) {
            return Err(CatalogError::Duplicate {
                assessment_type: definition.assessment_type,
            });
        }
        validate_definition(definition)?;
    }
    Ok(())
}

/// Validate one definition's internal consistency.
pub fn validate_definition(definition: &QuestionnaireDefinition) -> Result<(), CatalogError> {
    let assessment_type = definition.assessment_type;

    if definition.questions.is_empty() {
        return Err(CatalogError::NoQuestions { assessment_type });
    }

    if definition.scale.len() != definition.points.len() {
        return Err(CatalogError::ScaleMismatch {
            assessment_type,
            labels: definition.scale.len(),
            points: definition.points.len(),
        });
    }

    let starts_at_zero = definition.points.first() == Some(&0);
    let increasing = definition.points.windows(2).all(|w| w[0] < w[1]);
    if !starts_at_zero || !increasing {
        return Err(CatalogError::InvalidPoints { assessment_type });
    }

    match &definition.scoring_rules {
        ScoringRules::Simple { ranges } => {
            if let Some(index) = definition.questions.iter().position(|q| q.subscale.is_some()) {
                return Err(CatalogError::SubscaleTagging {
                    assessment_type,
                    index,
                });
            }
            validate_bands(ranges, definition.max_possible_score()).map_err(|source| {
                CatalogError::Ranges {
                    assessment_type,
                    source,
                }
            })
        }
        ScoringRules::Composite { subscales } => {
            if let Some(index) = definition.questions.iter().position(|q| q.subscale.is_none()) {
                return Err(CatalogError::SubscaleTagging {
                    assessment_type,
                    index,
                });
            }
            for subscale in Subscale::ALL {
                let rule = subscales.get(subscale);
                if rule.multiplier == 0 {
                    return Err(CatalogError::ZeroMultiplier {
                        assessment_type,
                        subscale,
                    });
                }
                if definition.questions_in(subscale) == 0 {
                    return Err(CatalogError::EmptySubscale {
                        assessment_type,
                        subscale,
                    });
                }
                let max = definition.subscale_max(subscale, rule.multiplier);
                validate_bands(&rule.ranges, max).map_err(|source| {
                    CatalogError::SubscaleRanges {
                        assessment_type,
                        subscale,
                        source,
                    }
                })?;
            }
            Ok(())
        }
    }
}
