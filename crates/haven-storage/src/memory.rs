//! In-process [`WellnessStore`] with the same conditional-write semantics as
//! the S3 store. ETags are per-key version counters.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use haven_core::models::activity::ActivityRecord;
use haven_core::models::assessment::AssessmentResult;
use haven_core::models::badge::{Badge, UserBadge};
use haven_core::models::profile::GamificationProfile;

use crate::error::StorageError;
use crate::store::{AwardOutcome, WellnessStore};

#[derive(Default)]
struct Inner {
    profiles: HashMap<String, (GamificationProfile, u64)>,
    activities: Vec<ActivityRecord>,
    catalog: Option<Vec<Badge>>,
    user_badges: BTreeMap<(String, String), UserBadge>,
    results: HashMap<(String, Uuid), AssessmentResult>,
    /// Conditional profile writes still to be rejected, simulating writers
    /// that keep winning the race.
    contended_writes: u32,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `writes` profile saves with `PreconditionFailed`.
    pub async fn contend_profile_writes(&self, writes: u32) {
        self.inner.lock().await.contended_writes = writes;
    }
}

fn etag(version: u64) -> String {
    format!("\"v{version}\"")
}

#[async_trait]
impl WellnessStore for MemoryStore {
    async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<(GamificationProfile, String)>, StorageError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .profiles
            .get(user_id)
            .map(|(profile, version)| (profile.clone(), etag(*version))))
    }

    async fn save_profile(
        &self,
        user_id: &str,
        profile: &GamificationProfile,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError> {
        let mut inner = self.inner.lock().await;
        let conflict = || StorageError::PreconditionFailed {
            key: haven_core::keys::profile(user_id),
        };

        if inner.contended_writes > 0 {
            inner.contended_writes -= 1;
            return Err(conflict());
        }

        let current = inner.profiles.get(user_id).map(|(_, v)| *v);
        let next = match (current, expected_etag) {
            (None, None) => 1,
            (Some(version), Some(expected)) if etag(version) == expected => version + 1,
            _ => return Err(conflict()),
        };
        inner
            .profiles
            .insert(user_id.to_string(), (profile.clone(), next));
        Ok(etag(next))
    }

    async fn insert_activity(&self, record: &ActivityRecord) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().await;
        if inner.activities.iter().any(|a| a.id == record.id) {
            return Err(StorageError::AlreadyExists {
                key: haven_core::keys::activity(&record.user_id, record.id),
            });
        }
        inner.activities.push(record.clone());
        Ok(())
    }

    async fn list_activities(&self, user_id: &str) -> Result<Vec<ActivityRecord>, StorageError> {
        let inner = self.inner.lock().await;
        let mut records: Vec<ActivityRecord> = inner
            .activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }

    async fn get_badge_catalog(&self) -> Result<Option<Vec<Badge>>, StorageError> {
        Ok(self.inner.lock().await.catalog.clone())
    }

    async fn save_badge_catalog(&self, badges: &[Badge]) -> Result<(), StorageError> {
        self.inner.lock().await.catalog = Some(badges.to_vec());
        Ok(())
    }

    async fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StorageError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .user_badges
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_user_badge(&self, award: &UserBadge) -> Result<AwardOutcome, StorageError> {
        let mut inner = self.inner.lock().await;
        let key = (award.user_id.clone(), award.badge_id.clone());
        if inner.user_badges.contains_key(&key) {
            return Ok(AwardOutcome::AlreadyAwarded);
        }
        inner.user_badges.insert(key, award.clone());
        Ok(AwardOutcome::Inserted)
    }

    async fn insert_assessment_result(
        &self,
        result: &AssessmentResult,
    ) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().await;
        let key = (result.user_id.clone(), result.id);
        if inner.results.contains_key(&key) {
            return Err(StorageError::AlreadyExists {
                key: haven_core::keys::assessment_result(&result.user_id, result.id),
            });
        }
        inner.results.insert(key, result.clone());
        Ok(())
    }

    async fn get_assessment_result(
        &self,
        user_id: &str,
        id: Uuid,
    ) -> Result<Option<AssessmentResult>, StorageError> {
        let inner = self.inner.lock().await;
        Ok(inner.results.get(&(user_id.to_string(), id)).cloned())
    }

    async fn list_assessment_results(
        &self,
        user_id: &str,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let inner = self.inner.lock().await;
        let mut results: Vec<AssessmentResult> = inner
            .results
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }
}
