//! Scoring store repository trait
//!
//! Domain-level abstraction over the shared persistence store, the sole
//! coordination point between concurrent inbound actions. Implementations
//! live in the infrastructure layer and must honor the atomicity notes on
//! each method; no caller holds a lock across more than one call.

use crate::classify::Horizon;
use crate::core::{AssumptionId, Scope, SessionId};
use crate::scoring::ScoreRecord;
use async_trait::async_trait;
use thiserror::Error;

use super::entities::Session;

/// Errors surfaced by store implementations.
///
/// The store never retries or backs off internally; `Unavailable` is passed
/// through as-is for the caller to handle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("an open session already exists for scope {0}")]
    ActiveSessionExists(Scope),

    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("session {0} is already revealed")]
    SessionClosed(SessionId),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Repository trait for sessions, scores and assumption horizons.
#[async_trait]
pub trait ScoringStore: Send + Sync {
    /// Create an Open session for the scope.
    ///
    /// Atomic check-and-insert: when an Open session already exists for the
    /// scope this fails with [`StoreError::ActiveSessionExists`] without side
    /// effects, even under concurrent callers.
    async fn create_session(&self, scope: &Scope) -> Result<Session, StoreError>;

    /// The Open session for a scope, if any.
    async fn get_active_session(&self, scope: &Scope) -> Result<Option<Session>, StoreError>;

    /// Look up a session by id regardless of status.
    async fn get_session(&self, id: SessionId) -> Result<Option<Session>, StoreError>;

    /// Transition a session Open → Revealed and return it.
    ///
    /// Idempotent: closing an already-revealed session returns it unchanged.
    async fn close_session(&self, id: SessionId) -> Result<Session, StoreError>;

    /// Insert or replace the score row keyed by (session, assumption, rater).
    ///
    /// Atomic: two concurrent submissions from the same rater leave exactly
    /// one row. Fails with [`StoreError::SessionClosed`] when the session has
    /// been revealed; the status check happens inside the same critical
    /// section as the write, so a score either commits strictly before the
    /// reveal transition or is rejected.
    async fn upsert_score(&self, record: ScoreRecord) -> Result<(), StoreError>;

    /// All committed score rows for a session.
    async fn list_scores(&self, session_id: SessionId) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Overwrite an assumption's horizon attribute.
    ///
    /// The assumption itself is owned by a collaborator system; this is the
    /// only field the engine writes.
    async fn update_assumption_horizon(
        &self,
        assumption_id: AssumptionId,
        horizon: Horizon,
    ) -> Result<(), StoreError>;
}
