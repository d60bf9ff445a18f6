use std::fmt;

use serde::Serialize;
use tracing::info;

/// The state changes worth an audit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    #[serde(rename = "assessment_result.create")]
    AssessmentResultCreate,
    #[serde(rename = "activity.record")]
    ActivityRecord,
    #[serde(rename = "badge.award")]
    BadgeAward,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssessmentResultCreate => "assessment_result.create",
            Self::ActivityRecord => "activity.record",
            Self::BadgeAward => "badge.award",
        }
    }

    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::AssessmentResultCreate => "assessment_result",
            Self::ActivityRecord => "activity",
            Self::BadgeAward => "user_badge",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured audit event for one API-driven state change.
///
/// Events never carry questionnaire responses or narrative text, only ids
/// and the small set of details the caller attaches.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_id: String,
    pub user_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        resource_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_id: resource_id.into(),
            user_id: user_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = self.action.resource_type(),
            audit.resource_id = %self.resource_id,
            audit.user_id = %self.user_id,
            audit.details = %details,
            "audit event"
        );
    }
}
