//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the Haven S3 bucket. User ids are JWT subjects and
//! are checked for path separators before they reach these functions.

use uuid::Uuid;

pub fn profile(user_id: &str) -> String {
    format!("profiles/{user_id}.json")
}

pub fn activity(user_id: &str, id: Uuid) -> String {
    format!("activities/{user_id}/{id}.json")
}

pub fn activities_prefix(user_id: &str) -> String {
    format!("activities/{user_id}/")
}

pub fn user_badge(user_id: &str, badge_id: &str) -> String {
    format!("user-badges/{user_id}/{badge_id}.json")
}

pub fn user_badges_prefix(user_id: &str) -> String {
    format!("user-badges/{user_id}/")
}

pub fn assessment_result(user_id: &str, id: Uuid) -> String {
    format!("results/{user_id}/{id}.json")
}

pub fn assessment_results_prefix(user_id: &str) -> String {
    format!("results/{user_id}/")
}

pub const BADGE_CATALOG: &str = "catalog/badges.json";
