//! Submit Score use case

use room_domain::{
    AssumptionId, CriteriaScores, CriteriaSet, RaterId, ScoreRecord, ScoringPolicy, ScoringStore,
    SessionId, StoreError, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when submitting a score
#[derive(Error, Debug)]
pub enum SubmitScoreError {
    /// Rejected before any write; safe to retry once corrected.
    #[error("invalid score: {0}")]
    Validation(#[from] ValidationError),

    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// The session was revealed before this score committed. Late
    /// submissions are rejected, never silently accepted.
    #[error("session {0} is already revealed")]
    SessionClosed(SessionId),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// Input for the SubmitScore use case
#[derive(Debug, Clone)]
pub struct SubmitScoreInput {
    pub session_id: SessionId,
    pub assumption_id: AssumptionId,
    pub rater_id: RaterId,
    pub criteria: CriteriaScores,
    pub rationale: Option<String>,
    /// Which criteria this flow requires (full session scoring vs quick vote).
    pub criteria_set: CriteriaSet,
}

impl SubmitScoreInput {
    pub fn new(
        session_id: SessionId,
        assumption_id: AssumptionId,
        rater_id: RaterId,
        criteria: CriteriaScores,
    ) -> Self {
        Self {
            session_id,
            assumption_id,
            rater_id,
            criteria,
            rationale: None,
            criteria_set: CriteriaSet::Full,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_criteria_set(mut self, set: CriteriaSet) -> Self {
        self.criteria_set = set;
        self
    }
}

/// Use case for recording one rater's score for one assumption.
///
/// Bounds are validated per criterion before any write reaches the store;
/// the store then performs an atomic upsert keyed by
/// (session, assumption, rater), so a double-submit replaces rather than
/// duplicates the stored row.
pub struct SubmitScoreUseCase<S: ScoringStore> {
    store: Arc<S>,
    policy: ScoringPolicy,
}

impl<S: ScoringStore> SubmitScoreUseCase<S> {
    pub fn new(store: Arc<S>, policy: ScoringPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn execute(&self, input: SubmitScoreInput) -> Result<(), SubmitScoreError> {
        input
            .criteria
            .validate_for(input.criteria_set, self.policy.bounds)?;

        debug!(
            "Recording score from {} for assumption {} in session {}",
            input.rater_id, input.assumption_id, input.session_id
        );

        let mut record = ScoreRecord::new(
            input.session_id,
            input.assumption_id,
            input.rater_id.clone(),
            input.criteria,
        );
        if let Some(rationale) = input.rationale {
            record = record.with_rationale(rationale);
        }

        match self.store.upsert_score(record).await {
            Ok(()) => {
                info!(
                    "Score recorded for assumption {} by {}",
                    input.assumption_id, input.rater_id
                );
                Ok(())
            }
            Err(StoreError::SessionNotFound(id)) => Err(SubmitScoreError::SessionNotFound(id)),
            Err(StoreError::SessionClosed(id)) => Err(SubmitScoreError::SessionClosed(id)),
            Err(e) => Err(SubmitScoreError::Store(e)),
        }
    }
}
