use async_trait::async_trait;
use aws_sdk_s3::Client;
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use haven_core::keys;
use haven_core::models::activity::ActivityRecord;
use haven_core::models::assessment::AssessmentResult;
use haven_core::models::badge::{Badge, UserBadge};
use haven_core::models::profile::GamificationProfile;

use crate::error::StorageError;
use crate::state;
use crate::store::{AwardOutcome, WellnessStore};

/// [`WellnessStore`] over one S3 bucket, one JSON object per record.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Load every JSON object under a prefix. Objects that no longer exist
    /// or fail to parse are skipped with a warning.
    async fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let keys = crate::objects::list_objects(&self.client, &self.bucket, prefix).await?;
        let mut items = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            match state::load_state::<T>(&self.client, &self.bucket, key).await {
                Ok((item, _)) => items.push(item),
                Err(StorageError::NotFound { .. }) => {}
                Err(StorageError::Serialization(e)) => {
                    warn!(key = %key, error = %e, "skipping unreadable object");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl WellnessStore for S3Store {
    async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<(GamificationProfile, String)>, StorageError> {
        state::load_state_opt(&self.client, &self.bucket, &keys::profile(user_id)).await
    }

    async fn save_profile(
        &self,
        user_id: &str,
        profile: &GamificationProfile,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError> {
        let key = keys::profile(user_id);
        match expected_etag {
            Some(etag) => {
                state::save_state_if_match(&self.client, &self.bucket, &key, profile, etag).await
            }
            None => state::create_state(&self.client, &self.bucket, &key, profile)
                .await
                .map_err(|e| match e {
                    StorageError::AlreadyExists { key } => StorageError::PreconditionFailed { key },
                    other => other,
                }),
        }
    }

    async fn insert_activity(&self, record: &ActivityRecord) -> Result<(), StorageError> {
        let key = keys::activity(&record.user_id, record.id);
        state::create_state(&self.client, &self.bucket, &key, record).await?;
        Ok(())
    }

    async fn list_activities(&self, user_id: &str) -> Result<Vec<ActivityRecord>, StorageError> {
        let mut records: Vec<ActivityRecord> =
            self.load_all(&keys::activities_prefix(user_id)).await?;
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }

    async fn get_badge_catalog(&self) -> Result<Option<Vec<Badge>>, StorageError> {
        Ok(
            state::load_state_opt::<Vec<Badge>>(&self.client, &self.bucket, keys::BADGE_CATALOG)
                .await?
                .map(|(badges, _)| badges),
        )
    }

    async fn save_badge_catalog(&self, badges: &[Badge]) -> Result<(), StorageError> {
        state::save_state(&self.client, &self.bucket, keys::BADGE_CATALOG, &badges).await?;
        Ok(())
    }

    async fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StorageError> {
        self.load_all(&keys::user_badges_prefix(user_id)).await
    }

    async fn insert_user_badge(&self, award: &UserBadge) -> Result<AwardOutcome, StorageError> {
        let key = keys::user_badge(&award.user_id, &award.badge_id);
        match state::create_state(&self.client, &self.bucket, &key, award).await {
            Ok(_) => Ok(AwardOutcome::Inserted),
            Err(StorageError::AlreadyExists { .. }) => Ok(AwardOutcome::AlreadyAwarded),
            Err(e) => Err(e),
        }
    }

    async fn insert_assessment_result(
        &self,
        result: &AssessmentResult,
    ) -> Result<(), StorageError> {
        let key = keys::assessment_result(&result.user_id, result.id);
        state::create_state(&self.client, &self.bucket, &key, result).await?;
        Ok(())
    }

    async fn get_assessment_result(
        &self,
        user_id: &str,
        id: Uuid,
    ) -> Result<Option<AssessmentResult>, StorageError> {
        Ok(state::load_state_opt::<AssessmentResult>(
            &self.client,
            &self.bucket,
            &keys::assessment_result(user_id, id),
        )
        .await?
        .map(|(result, _)| result))
    }

    async fn list_assessment_results(
        &self,
        user_id: &str,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results: Vec<AssessmentResult> =
            self.load_all(&keys::assessment_results_prefix(user_id)).await?;
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }
}
