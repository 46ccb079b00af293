//! The derivation engine.
//!
//! Pure functions recomputed from a record set whenever the set or the
//! filter criteria change. Nothing here mutates its input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::feedback::{Category, FeedbackRecord, FeedbackStatus};
use crate::models::filter::{FilterCriteria, Matcher};
use crate::models::stats::FeedbackStats;

/// Everything a dashboard needs for one render: the filtered list, the
/// aggregate stats and the distinct categories to offer as filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedView {
    pub items: Vec<FeedbackRecord>,
    pub stats: FeedbackStats,
    pub categories: Vec<Category>,
}

/// Distinct categories present in `records`, in first-seen order.
pub fn categories(records: &[FeedbackRecord]) -> Vec<Category> {
    let mut seen = Vec::new();
    for record in records {
        if !seen.contains(&record.category) {
            seen.push(record.category);
        }
    }
    seen
}

/// The ordered subsequence of `records` matching every active predicate.
pub fn filter(records: &[FeedbackRecord], criteria: &FilterCriteria) -> Vec<FeedbackRecord> {
    if criteria.is_unrestricted() {
        return records.to_vec();
    }

    let matcher = Matcher::new(criteria);
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .cloned()
        .collect()
}

pub fn stats(records: &[FeedbackRecord]) -> FeedbackStats {
    let mut pending = 0;
    let mut resolved = 0;
    let mut category_counts = BTreeMap::new();

    for record in records {
        match record.status {
            FeedbackStatus::Pending => pending += 1,
            FeedbackStatus::Resolved => resolved += 1,
        }
        *category_counts.entry(record.category).or_insert(0) += 1;
    }

    FeedbackStats {
        total: records.len(),
        pending,
        resolved,
        category_counts,
        resolution_rate: resolution_rate(resolved, records.len()),
    }
}

/// `round(100 * resolved / total)` with halves rounded up, or `0` when the
/// set is empty.
pub fn resolution_rate(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let resolved = resolved as u64;
    let total = total as u64;
    ((200 * resolved + total) / (2 * total)) as u32
}

pub fn derive_view(records: &[FeedbackRecord], criteria: &FilterCriteria) -> DerivedView {
    DerivedView {
        items: filter(records, criteria),
        stats: stats(records),
        categories: categories(records),
    }
}
