use serde::Serialize;
use tracing::info;

use feedbox_core::models::feedback::{Category, FeedbackStatus};

/// Actor recorded for public, unauthenticated actions.
pub const ANONYMOUS: &str = "anonymous";

/// A structured audit event for a state-changing or security-relevant action.
///
/// Events never carry feedback message text, so submissions stay anonymous
/// in the logs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn feedback_submitted(id: &str, category: Category, stored: bool) -> Self {
        Self::new("feedback.submitted", "feedback", id, ANONYMOUS).with_details(
            serde_json::json!({ "category": category, "stored": stored }),
        )
    }

    pub fn status_changed(id: &str, from: FeedbackStatus, to: FeedbackStatus, actor: &str) -> Self {
        Self::new("feedback.status_changed", "feedback", id, actor)
            .with_details(serde_json::json!({ "from": from, "to": to }))
    }

    pub fn admin_login(username: &str, authenticated: bool) -> Self {
        Self::new("admin.login", "session", username, username)
            .with_details(serde_json::json!({ "authenticated": authenticated }))
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
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            audit.details = %details,
            "audit event"
        );
    }
}
