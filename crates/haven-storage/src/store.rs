//! The persistence seam.
//!
//! Every mutable document is versioned by an opaque ETag. Callers read a
//! document with its ETag and write back conditionally; a lost race surfaces
//! as [`StorageError::PreconditionFailed`] and the caller re-reads.

use async_trait::async_trait;
use uuid::Uuid;

use haven_core::models::activity::ActivityRecord;
use haven_core::models::assessment::AssessmentResult;
use haven_core::models::badge::{Badge, UserBadge};
use haven_core::models::profile::GamificationProfile;

use crate::error::StorageError;

/// Outcome of recording a badge award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardOutcome {
    Inserted,
    /// The (user, badge) pair was already recorded; nothing was written.
    AlreadyAwarded,
}

#[async_trait]
pub trait WellnessStore: Send + Sync {
    /// The user's profile and its ETag, or `None` if never written.
    async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<(GamificationProfile, String)>, StorageError>;

    /// Write a profile. `expected_etag` of `None` creates the profile and
    /// fails if one appeared in the meantime. Returns the new ETag.
    async fn save_profile(
        &self,
        user_id: &str,
        profile: &GamificationProfile,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError>;

    /// Append one ledger entry.
    async fn insert_activity(&self, record: &ActivityRecord) -> Result<(), StorageError>;

    async fn list_activities(&self, user_id: &str) -> Result<Vec<ActivityRecord>, StorageError>;

    /// The stored badge catalog, or `None` if none has been published.
    async fn get_badge_catalog(&self) -> Result<Option<Vec<Badge>>, StorageError>;

    async fn save_badge_catalog(&self, badges: &[Badge]) -> Result<(), StorageError>;

    async fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StorageError>;

    /// Record an award at most once per (user, badge).
    async fn insert_user_badge(&self, award: &UserBadge) -> Result<AwardOutcome, StorageError>;

    async fn insert_assessment_result(&self, result: &AssessmentResult)
    -> Result<(), StorageError>;

    async fn get_assessment_result(
        &self,
        user_id: &str,
        id: Uuid,
    ) -> Result<Option<AssessmentResult>, StorageError>;

    /// All of a user's results, newest first.
    async fn list_assessment_results(
        &self,
        user_id: &str,
    ) -> Result<Vec<AssessmentResult>, StorageError>;
}
