//! Deterministic interpretation text, used whenever the completion service
//! cannot produce one. Never empty, never needs the network.

use haven_core::models::assessment::{SeverityLevel, Subscale};

use crate::bands::level_rank;
use crate::definition::{QuestionnaireDefinition, ScoringRules};

/// Which template a severity level selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTier {
    Low,
    Mild,
    Moderate,
    Severe,
    Neutral,
}

/// Select a tier by case-insensitive substring match, first hit wins:
/// minimal/normal, then mild, then moderate, then severe.
///
/// "Moderately Severe" therefore lands on `Moderate` and "Extremely Severe"
/// on `Severe`.
pub fn tier_for(level: &str) -> FallbackTier {
    let level = level.to_lowercase();
    if level.contains("minimal") || level.contains("normal") {
        FallbackTier::Low
    } else if level.contains("mild") {
        FallbackTier::Mild
    } else if level.contains("moderate") {
        FallbackTier::Moderate
    } else if level.contains("severe") {
        FallbackTier::Severe
    } else {
        FallbackTier::Neutral
    }
}

/// The level string the tier is chosen from.
///
/// A composite severity is keyed on its most severe subscale, ranked by band
/// position in that subscale's table. Ties go to the earlier subscale in
/// reporting order. Levels the table does not know fall back to the joined
/// description.
pub fn severity_key(definition: &QuestionnaireDefinition, severity: &SeverityLevel) -> String {
    let levels = match severity {
        SeverityLevel::Label(label) => return label.clone(),
        SeverityLevel::Subscales(levels) => levels,
    };
    let ScoringRules::Composite { subscales } = &definition.scoring_rules else {
        return severity.describe();
    };

    let mut worst: Option<(usize, Subscale)> = None;
    for (subscale, level) in levels.iter() {
        let Some(rank) = level_rank(&subscales.get(subscale).ranges, level) else {
            return severity.describe();
        };
        if worst.is_none_or(|(best, _)| rank > best) {
            worst = Some((rank, subscale));
        }
    }

    match worst {
        Some((_, subscale)) => levels.get(subscale).clone(),
        None => severity.describe(),
    }
}

/// Build the offline interpretation for a scored assessment.
pub fn fallback_interpretation(
    definition: &QuestionnaireDefinition,
    total_score: f64,
    severity: &SeverityLevel,
) -> String {
    let name = &definition.name;
    let described = severity.describe();

    match tier_for(&severity_key(definition, severity)) {
        FallbackTier::Low => format!(
            "Your {name} results suggest minimal symptoms right now ({described}). \
             Keep up the routines that help you feel grounded, such as journaling, \
             movement and rest, and check in with yourself again in a few weeks."
        ),
        FallbackTier::Mild => format!(
            "Your {name} results point to mild symptoms ({described}). Small, steady \
             habits like regular sleep, time outdoors and the guided breathing \
             exercises can make a real difference. Consider retaking this assessment \
             in two weeks to see how things change."
        ),
        FallbackTier::Moderate => format!(
            "Your {name} results indicate moderate symptoms ({described}). It may help \
             to talk with someone you trust and to consider reaching out to a mental \
             health professional. Journaling and guided exercises can support you in \
             the meantime."
        ),
        FallbackTier::Severe => format!(
            "Your {name} results suggest you are going through a lot right now \
             ({described}). You do not have to face this alone. We strongly recommend \
             contacting a licensed mental health professional or your doctor soon. If \
             you are in crisis or thinking about harming yourself, call your local \
             emergency number or a crisis line right away."
        ),
        FallbackTier::Neutral => format!(
            "Thank you for completing the {name}. Your total score was {total_score} \
             ({described}). A screening score is not a diagnosis; if anything in these \
             results concerns you, a mental health professional can help you make \
             sense of it."
        ),
    }
}
