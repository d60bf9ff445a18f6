use haven_audit::events::{AuditAction, AuditEvent};
use serde_json::json;

#[test]
fn action_names_match_log_vocabulary() {
    assert_eq!(AuditAction::AssessmentResultCreate.as_str(), "assessment_result.create");
    assert_eq!(AuditAction::ActivityRecord.as_str(), "activity.record");
    assert_eq!(AuditAction::BadgeAward.as_str(), "badge.award");
    assert_eq!(AuditAction::BadgeAward.resource_type(), "user_badge");
}

#[test]
fn event_serializes_with_details() {
    let event = AuditEvent::new(AuditAction::ActivityRecord, "rec-1", "user-1")
        .with_details(json!({ "points": 10 }));

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "activity.record");
    assert_eq!(value["resource_id"], "rec-1");
    assert_eq!(value["user_id"], "user-1");
    assert_eq!(value["details"]["points"], 10);
}

#[test]
fn emit_without_subscriber_is_harmless() {
    AuditEvent::new(AuditAction::BadgeAward, "century", "user-1").emit();
}
