use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single anonymous feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRecord {
    pub id: String,
    pub category: Category,
    pub message: String,
    pub submitted_at: jiff::Timestamp,
    pub status: FeedbackStatus,
}

/// Workflow state of a record. New records always start out `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Resolved,
}

impl FeedbackStatus {
    /// The other state. Transitions are unguarded in both directions.
    pub fn toggled(self) -> Self {
        match self {
            FeedbackStatus::Pending => FeedbackStatus::Resolved,
            FeedbackStatus::Resolved => FeedbackStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FeedbackStatus::Pending),
            "resolved" => Ok(FeedbackStatus::Resolved),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// The fixed set of feedback categories offered at intake.
///
/// Serialized as the human-readable label, e.g. `"Administrative Issues"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Category {
    Academics,
    Hostel,
    #[serde(rename = "Administrative Issues")]
    AdministrativeIssues,
    Facilities,
    Welfare,
    Others,
}

impl Category {
    /// Every category, in the order the intake form lists them.
    pub const ALL: [Category; 6] = [
        Category::Academics,
        Category::Hostel,
        Category::AdministrativeIssues,
        Category::Facilities,
        Category::Welfare,
        Category::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Academics => "Academics",
            Category::Hostel => "Hostel",
            Category::AdministrativeIssues => "Administrative Issues",
            Category::Facilities => "Facilities",
            Category::Welfare => "Welfare",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}
