//! Resolve Sync use case
//!
//! Thin application entry point over the domain's pure conflict resolution;
//! invoked whenever the external mirror reports a status change.

use room_domain::{ExperimentStatus, SyncDecision, resolve_status_conflict};
use tracing::debug;

/// Reconcile a local experiment's status with its external mirror.
///
/// Infallible: always returns one of the three decision values. The
/// `Conflict` case is returned to the caller for human escalation, never
/// acted on here.
pub fn resolve_sync(local: ExperimentStatus, remote_done: bool) -> SyncDecision {
    let decision = resolve_status_conflict(local, remote_done);
    debug!(
        "Sync resolution: local={}, remote_done={} -> {}",
        local, remote_done, decision
    );
    decision
}
