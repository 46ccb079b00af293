//! The status workflow.
//!
//! Two states, one unguarded transition. Every operation returns a new
//! record set and leaves its input untouched. An id that matches no record
//! is a no-op, not an error.

use crate::models::feedback::{FeedbackRecord, FeedbackStatus};

/// Copy of `records` with the status of record `id` replaced by `status`.
pub fn set_status(
    records: &[FeedbackRecord],
    id: &str,
    status: FeedbackStatus,
) -> Vec<FeedbackRecord> {
    map_matching(records, id, |_| status)
}

/// Copy of `records` with the status of record `id` flipped.
pub fn toggle_status(records: &[FeedbackRecord], id: &str) -> Vec<FeedbackRecord> {
    map_matching(records, id, FeedbackStatus::toggled)
}

pub fn find<'a>(records: &'a [FeedbackRecord], id: &str) -> Option<&'a FeedbackRecord> {
    records.iter().find(|record| record.id == id)
}

fn map_matching(
    records: &[FeedbackRecord],
    id: &str,
    next: impl Fn(FeedbackStatus) -> FeedbackStatus,
) -> Vec<FeedbackRecord> {
    records
        .iter()
        .map(|record| {
            if record.id == id {
                FeedbackRecord {
                    status: next(record.status),
                    ..record.clone()
                }
            } else {
                record.clone()
            }
        })
        .collect()
}
