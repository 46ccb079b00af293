//! Dashboard view state: the active filter plus at most one record opened
//! in a detail view.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::derive::{self, DerivedView};
use crate::models::feedback::FeedbackRecord;
use crate::models::filter::FilterCriteria;
use crate::store::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub criteria: FilterCriteria,
    pub open: Option<String>,
}

/// One fully derived dashboard render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardView {
    #[ts(type = "number")]
    pub version: u64,
    pub criteria: FilterCriteria,
    #[serde(flatten)]
    pub derived: DerivedView,
    pub detail: Option<FeedbackRecord>,
}

impl DashboardState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            open: None,
        }
    }

    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.open = Some(id.into());
    }

    pub fn close_detail(&mut self) {
        self.open = None;
    }

    /// A record's status just changed: close the detail view if it shows that record.
    pub fn status_changed(&mut self, id: &str) {
        if self.open.as_deref() == Some(id) {
            self.open = None;
        }
    }

    pub fn render(&self, snapshot: &Snapshot) -> DashboardView {
        let detail = self
            .open
            .as_deref()
            .and_then(|id| snapshot.find(id))
            .cloned();

        DashboardView {
            version: snapshot.version,
            criteria: self.criteria.clone(),
            derived: derive::derive_view(&snapshot.records, &self.criteria),
            detail,
        }
    }
}
