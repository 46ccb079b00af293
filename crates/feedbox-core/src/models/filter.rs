use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::feedback::{FeedbackRecord, FeedbackStatus};

/// Criteria for narrowing the record set on the admin dashboard.
///
/// Deserializes from a query string such as
/// `status=pending&category=Hostel&search=water`. Missing keys mean
/// "no restriction". `q` is accepted as a short form of `search`; when both
/// are given, `search` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(from = "CriteriaParams")]
#[ts(export)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    #[ts(type = "string")]
    pub category: CategoryFilter,
    pub search: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CriteriaParams {
    status: StatusFilter,
    category: CategoryFilter,
    search: String,
    q: String,
}

impl From<CriteriaParams> for FilterCriteria {
    fn from(params: CriteriaParams) -> Self {
        let search = if params.search.is_empty() {
            params.q
        } else {
            params.search
        };
        Self {
            status: params.status,
            category: params.category,
            search,
        }
    }
}

impl FilterCriteria {
    /// True when every predicate is inactive, i.e. filtering is the identity.
    pub fn is_unrestricted(&self) -> bool {
        self.status == StatusFilter::All
            && self.category == CategoryFilter::All
            && self.search.is_empty()
    }

    /// Check a single record against all active predicates.
    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        Matcher::new(self).matches(record)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Resolved,
}

impl StatusFilter {
    pub fn matches(self, status: FeedbackStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == FeedbackStatus::Pending,
            StatusFilter::Resolved => status == FeedbackStatus::Resolved,
        }
    }
}

/// `all`, or a category label compared exactly against each record's
/// category. Labels that name no known category match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Criteria prepared for repeated matching: the search needle is
/// lower-cased once instead of per record.
pub(crate) struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    needle: Option<String>,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(criteria: &'a FilterCriteria) -> Self {
        let needle = (!criteria.search.is_empty()).then(|| criteria.search.to_lowercase());
        Self { criteria, needle }
    }

    pub(crate) fn matches(&self, record: &FeedbackRecord) -> bool {
        if !self.criteria.status.matches(record.status) {
            return false;
        }
        if !self.criteria.category.matches(record.category.as_str()) {
            return false;
        }
        match &self.needle {
            Some(needle) => record.message.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}
