use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::feedback::Category;

/// Aggregate counts over a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackStats {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
    /// Only categories present in the set appear here.
    pub category_counts: BTreeMap<Category, usize>,
    /// Percentage of resolved records, rounded half-up. `0` for an empty set.
    pub resolution_rate: u32,
}

impl FeedbackStats {
    pub fn count_for(&self, category: Category) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}
