//! Two-way sync conflict resolution

pub mod resolve;

pub use resolve::{ExperimentStatus, SyncDecision, resolve_status_conflict};
