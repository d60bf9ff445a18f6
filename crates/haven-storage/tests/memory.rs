use haven_core::models::activity::ActivityRecord;
use haven_core::models::assessment::{AssessmentResult, AssessmentType, NarrativeSource, SeverityLevel};
use haven_core::models::badge::UserBadge;
use haven_core::models::profile::GamificationProfile;
use haven_storage::error::StorageError;
use haven_storage::memory::MemoryStore;
use haven_storage::store::{AwardOutcome, WellnessStore};
use uuid::Uuid;

fn profile(points: u64) -> GamificationProfile {
    GamificationProfile {
        total_points: points,
        current_streak: 1,
        longest_streak: 1,
        last_activity_date: Some(jiff::civil::date(2026, 3, 1)),
    }
}

fn result(user: &str, at: &str) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        user_id: user.to_string(),
        assessment_type: AssessmentType::Gad7,
        responses: vec![0; 7],
        total_score: 0,
        severity_level: SeverityLevel::Label("Minimal".to_string()),
        subscale_scores: None,
        interpretation: "Minimal anxiety.".to_string(),
        narrative: "All good.".to_string(),
        narrative_source: NarrativeSource::Fallback,
        created_at: at.parse().unwrap(),
    }
}

#[tokio::test]
async fn missing_profile_reads_as_none() {
    let store = MemoryStore::new();
    assert!(store.get_profile("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn profile_create_then_conditional_update() {
    let store = MemoryStore::new();

    let first = store.save_profile("u1", &profile(10), None).await.unwrap();
    let (loaded, etag) = store.get_profile("u1").await.unwrap().unwrap();
    assert_eq!(loaded, profile(10));
    assert_eq!(etag, first);

    let second = store
        .save_profile("u1", &profile(20), Some(&etag))
        .await
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(store.get_profile("u1").await.unwrap().unwrap().0, profile(20));
}

#[tokio::test]
async fn stale_etag_is_rejected() {
    let store = MemoryStore::new();
    let stale = store.save_profile("u1", &profile(10), None).await.unwrap();
    store
        .save_profile("u1", &profile(20), Some(&stale))
        .await
        .unwrap();

    let err = store
        .save_profile("u1", &profile(30), Some(&stale))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));
    assert_eq!(store.get_profile("u1").await.unwrap().unwrap().0, profile(20));
}

#[tokio::test]
async fn second_create_is_rejected() {
    let store = MemoryStore::new();
    store.save_profile("u1", &profile(10), None).await.unwrap();
    let err = store.save_profile("u1", &profile(5), None).await.unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));
}

#[tokio::test]
async fn contended_writes_fail_then_clear() {
    let store = MemoryStore::new();
    store.contend_profile_writes(2).await;

    assert!(store.save_profile("u1", &profile(1), None).await.is_err());
    assert!(store.save_profile("u1", &profile(1), None).await.is_err());
    assert!(store.save_profile("u1", &profile(1), None).await.is_ok());
}

#[tokio::test]
async fn user_badge_is_recorded_once() {
    let store = MemoryStore::new();
    let award = UserBadge {
        user_id: "u1".to_string(),
        badge_id: "century".to_string(),
        earned_at: jiff::Timestamp::now(),
    };

    assert_eq!(
        store.insert_user_badge(&award).await.unwrap(),
        AwardOutcome::Inserted
    );
    assert_eq!(
        store.insert_user_badge(&award).await.unwrap(),
        AwardOutcome::AlreadyAwarded
    );
    assert_eq!(store.list_user_badges("u1").await.unwrap().len(), 1);
    assert!(store.list_user_badges("u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn activities_are_scoped_to_user() {
    let store = MemoryStore::new();
    for user in ["u1", "u1", "u2"] {
        store
            .insert_activity(&ActivityRecord {
                id: Uuid::new_v4(),
                user_id: user.to_string(),
                activity_type: "mood_log".to_string(),
                points_earned: 5,
                occurred_on: jiff::civil::date(2026, 3, 1),
                recorded_at: jiff::Timestamp::now(),
            })
            .await
            .unwrap();
    }
    assert_eq!(store.list_activities("u1").await.unwrap().len(), 2);
    assert_eq!(store.list_activities("u2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn results_list_newest_first() {
    let store = MemoryStore::new();
    let older = result("u1", "2026-03-01T09:00:00Z");
    let newer = result("u1", "2026-03-02T09:00:00Z");
    store.insert_assessment_result(&older).await.unwrap();
    store.insert_assessment_result(&newer).await.unwrap();
    store
        .insert_assessment_result(&result("u2", "2026-03-03T09:00:00Z"))
        .await
        .unwrap();

    let listed = store.list_assessment_results("u1").await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let found = store.get_assessment_result("u1", older.id).await.unwrap();
    assert_eq!(found.map(|r| r.id), Some(older.id));
    assert!(
        store
            .get_assessment_result("u2", older.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn catalog_absent_until_saved() {
    let store = MemoryStore::new();
    assert!(store.get_badge_catalog().await.unwrap().is_none());
    store
        .save_badge_catalog(&one_badge_catalog())
        .await
        .unwrap();
    assert_eq!(store.get_badge_catalog().await.unwrap().unwrap().len(), 1);
}

fn one_badge_catalog() -> Vec<haven_core::models::badge::Badge> {
    vec![haven_core::models::badge::Badge {
        id: "first-steps".to_string(),
        name: "First Steps".to_string(),
        description: "Earn your first 10 points.".to_string(),
        icon: "footprints".to_string(),
        points_required: 10,
    }]
}
