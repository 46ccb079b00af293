//! The in-memory feedback store.
//!
//! One authoritative record list, published as immutable versioned
//! snapshots. [`FeedbackStore::dispatch`] is the only way to change it, and
//! every change produces a new snapshot instead of editing the old one.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::CoreError;
use crate::models::feedback::{FeedbackRecord, FeedbackStatus};
use crate::workflow;

/// An immutable view of the record set at one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub version: u64,
    pub records: Vec<FeedbackRecord>,
}

impl Snapshot {
    pub fn find(&self, id: &str) -> Option<&FeedbackRecord> {
        workflow::find(&self.records, id)
    }
}

/// A requested change to the record set.
#[derive(Debug, Clone)]
pub enum Action {
    Append(FeedbackRecord),
    SetStatus { id: String, status: FeedbackStatus },
    Toggle { id: String },
}

/// Result of applying an [`Action`].
#[derive(Debug, Clone)]
pub struct Dispatched {
    /// The snapshot current after the action.
    pub snapshot: Arc<Snapshot>,
    /// `false` when the action targeted an id that is not in the set.
    pub applied: bool,
    /// `false` when the record set is identical to before.
    pub changed: bool,
}

#[derive(Debug)]
pub struct FeedbackStore {
    current: Arc<Snapshot>,
}

impl FeedbackStore {
    pub fn empty() -> Self {
        Self {
            current: Arc::new(Snapshot {
                version: 0,
                records: Vec::new(),
            }),
        }
    }

    /// Seed the store, keeping `records` in the given order.
    pub fn seeded(records: Vec<FeedbackRecord>) -> Result<Self, CoreError> {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(CoreError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            current: Arc::new(Snapshot {
                version: 0,
                records,
            }),
        })
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched, CoreError> {
        let current = &self.current.records;

        let (applied, next) = match action {
            Action::Append(record) => {
                if workflow::find(current, &record.id).is_some() {
                    return Err(CoreError::DuplicateId(record.id));
                }
                let mut next = current.clone();
                next.push(record);
                (true, next)
            }
            Action::SetStatus { id, status } => (
                workflow::find(current, &id).is_some(),
                workflow::set_status(current, &id, status),
            ),
            Action::Toggle { id } => (
                workflow::find(current, &id).is_some(),
                workflow::toggle_status(current, &id),
            ),
        };

        let changed = next != *current;
        if changed {
            self.current = Arc::new(Snapshot {
                version: self.current.version + 1,
                records: next,
            });
        }

        Ok(Dispatched {
            snapshot: self.snapshot(),
            applied,
            changed,
        })
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::empty()
    }
}
