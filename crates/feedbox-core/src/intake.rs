//! Submission intake: validation of candidate feedback before acceptance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::feedback::{Category, FeedbackRecord, FeedbackStatus};

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Default maximum message length, counted the same way as the minimum.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 2000;

/// How long the submitter's acknowledgment stays on screen before the form resets.
pub const ACK_DISPLAY_SECS: u32 = 5;

/// Raw form input, exactly as the submitter entered it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Submission {
    pub category: String,
    pub message: String,
}

/// Per-field validation messages. A field is `None` when it passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[error("submission failed validation")]
#[ts(export)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.message.is_none()
    }
}

/// A submission that passed validation. Only [`validate`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    category: Category,
    message: String,
}

impl ValidSubmission {
    pub fn category(&self) -> Category {
        self.category
    }

    /// The trimmed message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn the submission into a new `pending` record.
    pub fn into_record(self, id: String, submitted_at: jiff::Timestamp) -> FeedbackRecord {
        FeedbackRecord {
            id,
            category: self.category,
            message: self.message,
            submitted_at,
            status: FeedbackStatus::Pending,
        }
    }
}

/// Bounds applied to a submission on top of the fixed form rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeLimits {
    pub max_message_chars: usize,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

/// Check both fields and collect every failure, with the default limits.
pub fn validate(submission: &Submission) -> Result<ValidSubmission, FieldErrors> {
    validate_with(submission, IntakeLimits::default())
}

pub fn validate_with(
    submission: &Submission,
    limits: IntakeLimits,
) -> Result<ValidSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let category = if submission.category.is_empty() {
        errors.category = Some("Please select a category".to_string());
        None
    } else {
        match submission.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.category = Some("Please select a valid category".to_string());
                None
            }
        }
    };

    let message = submission.message.trim();
    let length = message.chars().count();
    if message.is_empty() {
        errors.message = Some("Please enter your feedback".to_string());
    } else if length < MIN_MESSAGE_CHARS {
        errors.message = Some(format!(
            "Feedback must be at least {MIN_MESSAGE_CHARS} characters long"
        ));
    } else if length > limits.max_message_chars {
        errors.message = Some(format!(
            "Feedback must be at most {} characters long",
            limits.max_message_chars
        ));
    }

    match category {
        Some(category) if errors.is_empty() => Ok(ValidSubmission {
            category,
            message: message.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Fresh opaque id for an accepted submission.
pub fn new_feedback_id() -> String {
    Uuid::new_v4().to_string()
}

/// What happens to a submission once it passes validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionPolicy {
    /// Append the new record to the store.
    #[default]
    Append,
    /// Acknowledge the submitter but keep nothing (demo mode).
    Discard,
}

impl fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionPolicy::Append => f.write_str("append"),
            SubmissionPolicy::Discard => f.write_str("discard"),
        }
    }
}

impl FromStr for SubmissionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(SubmissionPolicy::Append),
            "discard" => Ok(SubmissionPolicy::Discard),
            other => Err(CoreError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Transient acknowledgment returned to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionReceipt {
    pub id: String,
    pub status: FeedbackStatus,
    pub submitted_at: jiff::Timestamp,
    /// Whether the record was kept. `false` under [`SubmissionPolicy::Discard`].
    pub stored: bool,
    pub display_secs: u32,
}

impl SubmissionReceipt {
    pub fn for_record(record: &FeedbackRecord, stored: bool) -> Self {
        Self {
            id: record.id.clone(),
            status: record.status,
            submitted_at: record.submitted_at,
            stored,
            display_secs: ACK_DISPLAY_SECS,
        }
    }
}
