//! feedbox-core
//!
//! Pure domain types and logic for the anonymous feedback service: the
//! derivation engine, the status workflow, submission intake and the
//! versioned in-memory store. No I/O and no async.

pub mod derive;
pub mod error;
pub mod fixture;
pub mod intake;
pub mod models;
pub mod store;
pub mod view;
pub mod workflow;
