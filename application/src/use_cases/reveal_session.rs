//! Reveal Session use case
//!
//! Transitions the session Open → Revealed, aggregates committed scores per
//! assumption and applies the horizon classification side effect.

use super::shared::apply_horizons;
use room_domain::{
    AggregateResult, AssumptionId, Horizon, ScoringPolicy, ScoringStore, Session, SessionId,
    StoreError, aggregate_by_assumption,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during reveal
#[derive(Error, Debug)]
pub enum RevealError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// Output of a reveal.
///
/// An assumption nobody scored is absent from `results`: "no data to
/// reveal" is an empty map, not a failure.
#[derive(Debug, Clone)]
pub struct RevealOutput {
    /// The session after its (idempotent) Open → Revealed transition.
    pub session: Session,
    /// Aggregated judgment per scored assumption.
    pub results: BTreeMap<AssumptionId, AggregateResult>,
    /// Horizons written as a side effect of this reveal round.
    pub horizons: BTreeMap<AssumptionId, Horizon>,
}

/// Use case for revealing a session's aggregated scores.
///
/// Revealing twice is a no-op state transition, but aggregation and
/// classification run on every call; over unchanged committed rows the
/// output is identical each time.
pub struct RevealSessionUseCase<S: ScoringStore> {
    store: Arc<S>,
    policy: ScoringPolicy,
}

impl<S: ScoringStore> RevealSessionUseCase<S> {
    pub fn new(store: Arc<S>, policy: ScoringPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<RevealOutput, RevealError> {
        let session = match self.store.close_session(session_id).await {
            Ok(session) => session,
            Err(StoreError::SessionNotFound(id)) => return Err(RevealError::SessionNotFound(id)),
            Err(e) => return Err(RevealError::Store(e)),
        };

        let records = self
            .store
            .list_scores(session_id)
            .await
            .map_err(RevealError::Store)?;

        let results = aggregate_by_assumption(&records, &self.policy);
        info!(
            "Revealed session {}: {} scored assumptions from {} score rows",
            session_id,
            results.len(),
            records.len()
        );

        let horizons = apply_horizons(self.store.as_ref(), &results, &self.policy)
            .await
            .map_err(RevealError::Store)?;

        Ok(RevealOutput {
            session,
            results,
            horizons,
        })
    }
}
