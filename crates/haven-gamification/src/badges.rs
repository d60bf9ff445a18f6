use std::collections::HashSet;

use haven_core::models::badge::{Badge, BadgeState};

/// Badges the user qualifies for but has not been awarded.
///
/// Every qualifying badge is returned in one pass, in catalog order. A badge
/// id listed twice in the catalog is returned once. Feeding the result back
/// into `already_earned` makes a second call return nothing.
pub fn evaluate_badges<'a>(
    catalog: &'a [Badge],
    total_points: u64,
    already_earned: &HashSet<String>,
) -> Vec<&'a Badge> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|b| total_points >= b.points_required)
        .filter(|b| !already_earned.contains(&b.id))
        .filter(|&b| seen.insert(b.id.as_str()))
        .collect()
}

/// Where a user stands with one badge.
pub fn badge_state(badge: &Badge, total_points: u64, awarded: bool) -> BadgeState {
    if awarded {
        BadgeState::Awarded
    } else if total_points >= badge.points_required {
        BadgeState::Unlocked
    } else {
        BadgeState::Locked
    }
}

/// The built-in catalog, used when none is stored.
pub fn default_badges() -> Vec<Badge> {
    [
        ("first-steps", "First Steps", "Earn your first 10 points.", "sprout", 10),
        ("getting-started", "Getting Started", "Reach 50 points.", "seedling", 50),
        ("century", "Century", "Reach 100 points.", "star", 100),
        ("dedicated", "Dedicated", "Reach 250 points.", "flame", 250),
        ("committed", "Committed", "Reach 500 points.", "mountain", 500),
        ("mindful-master", "Mindful Master", "Reach 1000 points.", "lotus", 1000),
    ]
    .into_iter()
    .map(|(id, name, description, icon, points_required)| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        points_required,
    })
    .collect()
}
