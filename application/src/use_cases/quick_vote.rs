//! Quick Vote use case
//!
//! Single-assumption, immediate-reveal variant of the scoring engine. Votes
//! land in an implicit always-open session scoped to the assumption, the
//! aggregate is recomputed on every vote, and classification (heatmap label,
//! horizon) is applied immediately.

use super::shared::apply_horizons;
use super::submit_score::{SubmitScoreError, SubmitScoreInput, SubmitScoreUseCase};
use room_domain::{
    AggregateResult, AssumptionId, CriteriaScores, CriteriaSet, HeatmapLabel, Horizon, RaterId,
    Scope, ScoringPolicy, ScoringStore, Session, StoreError, aggregate_by_assumption,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a quick vote
#[derive(Error, Debug)]
pub enum QuickVoteError {
    #[error("invalid score: {0}")]
    Submit(#[from] SubmitScoreError),

    /// The vote committed but no longer appears in the store's rows.
    #[error("no committed scores for assumption {0}")]
    NoScores(AssumptionId),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// Input for the QuickVote use case
#[derive(Debug, Clone)]
pub struct QuickVoteInput {
    pub assumption_id: AssumptionId,
    pub rater_id: RaterId,
    pub impact: u8,
    pub uncertainty: u8,
    pub rationale: Option<String>,
}

impl QuickVoteInput {
    pub fn new(assumption_id: AssumptionId, rater_id: RaterId, impact: u8, uncertainty: u8) -> Self {
        Self {
            assumption_id,
            rater_id,
            impact,
            uncertainty,
            rationale: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Output of a quick vote round
#[derive(Debug, Clone)]
pub struct QuickVoteOutput {
    /// Aggregate over all quick votes for this assumption so far.
    pub result: AggregateResult,
    /// Priority quadrant for the aggregated (impact, uncertainty) pair.
    pub heatmap: HeatmapLabel,
    /// Horizon written this round, if the mean uncertainty crossed a threshold.
    pub horizon: Option<Horizon>,
}

/// Use case for an immediate single-assumption vote.
pub struct QuickVoteUseCase<S: ScoringStore> {
    store: Arc<S>,
    policy: ScoringPolicy,
}

impl<S: ScoringStore> QuickVoteUseCase<S> {
    pub fn new(store: Arc<S>, policy: ScoringPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn execute(&self, input: QuickVoteInput) -> Result<QuickVoteOutput, QuickVoteError> {
        let session = self.quick_session(input.assumption_id).await?;

        let criteria = CriteriaScores::quick(input.impact, input.uncertainty);
        let mut submit = SubmitScoreInput::new(
            session.id(),
            input.assumption_id,
            input.rater_id.clone(),
            criteria,
        )
        .with_criteria_set(CriteriaSet::Quick);
        if let Some(rationale) = input.rationale {
            submit = submit.with_rationale(rationale);
        }

        SubmitScoreUseCase::new(Arc::clone(&self.store), self.policy)
            .execute(submit)
            .await?;

        // Immediate reveal: read-only aggregation over committed rows.
        let records = self
            .store
            .list_scores(session.id())
            .await
            .map_err(QuickVoteError::Store)?;
        let results = aggregate_by_assumption(&records, &self.policy);
        let result = results
            .get(&input.assumption_id)
            .cloned()
            .ok_or(QuickVoteError::NoScores(input.assumption_id))?;

        let heatmap = HeatmapLabel::classify(
            result.avg_impact(),
            result.avg_uncertainty(),
            self.policy.bounds,
        );

        let single: BTreeMap<_, _> = [(input.assumption_id, result.clone())].into();
        let horizons = apply_horizons(self.store.as_ref(), &single, &self.policy)
            .await
            .map_err(QuickVoteError::Store)?;
        let horizon = horizons.get(&input.assumption_id).copied();

        info!(
            "Quick vote on assumption {} by {}: {} votes, heatmap {}",
            input.assumption_id,
            input.rater_id,
            result.count,
            heatmap
        );

        Ok(QuickVoteOutput {
            result,
            heatmap,
            horizon,
        })
    }

    /// The implicit always-open session backing quick votes for one
    /// assumption. Created on first vote; a concurrent first vote that loses
    /// the create race falls back to the winner's session.
    async fn quick_session(&self, assumption_id: AssumptionId) -> Result<Session, QuickVoteError> {
        let scope = Scope::quick(assumption_id);

        if let Some(session) = self
            .store
            .get_active_session(&scope)
            .await
            .map_err(QuickVoteError::Store)?
        {
            return Ok(session);
        }

        match self.store.create_session(&scope).await {
            Ok(session) => {
                debug!("Opened quick-vote session {} for {}", session.id(), scope);
                Ok(session)
            }
            Err(StoreError::ActiveSessionExists(_)) => self
                .store
                .get_active_session(&scope)
                .await
                .map_err(QuickVoteError::Store)?
                .ok_or_else(|| {
                    QuickVoteError::Store(StoreError::Unavailable(format!(
                        "quick session for {} vanished between create and lookup",
                        scope
                    )))
                }),
            Err(e) => Err(QuickVoteError::Store(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::CannedStore;

    #[tokio::test]
    async fn test_first_vote_creates_quick_session_and_reveals() {
        let store = Arc::new(CannedStore::new());
        let use_case = QuickVoteUseCase::new(Arc::clone(&store), ScoringPolicy::default());

        let output = use_case
            .execute(QuickVoteInput::new(AssumptionId::new(7), RaterId::new("U1"), 4, 3))
            .await
            .unwrap();

        assert_eq!(output.result.count, 1);
        assert_eq!(output.result.avg_impact(), 4.0);
        assert_eq!(output.heatmap, HeatmapLabel::TestFirst);
        // 3.0 sits between the thresholds; horizon untouched.
        assert_eq!(output.horizon, None);
    }

    #[tokio::test]
    async fn test_votes_accumulate_per_assumption() {
        let store = Arc::new(CannedStore::new());
        let use_case = QuickVoteUseCase::new(Arc::clone(&store), ScoringPolicy::default());

        use_case
            .execute(QuickVoteInput::new(AssumptionId::new(7), RaterId::new("U1"), 5, 5))
            .await
            .unwrap();
        let output = use_case
            .execute(QuickVoteInput::new(AssumptionId::new(7), RaterId::new("U2"), 3, 4))
            .await
            .unwrap();

        assert_eq!(output.result.count, 2);
        assert_eq!(output.result.avg_uncertainty(), 4.5);
        assert_eq!(output.horizon, Some(Horizon::Now));
        assert_eq!(store.horizon_of(AssumptionId::new(7)), Some(Horizon::Now));
    }

    #[tokio::test]
    async fn test_low_uncertainty_classifies_later() {
        let store = Arc::new(CannedStore::new());
        let use_case = QuickVoteUseCase::new(store, ScoringPolicy::default());

        let output = use_case
            .execute(QuickVoteInput::new(AssumptionId::new(8), RaterId::new("U1"), 1, 1))
            .await
            .unwrap();

        assert_eq!(output.horizon, Some(Horizon::Later));
        assert_eq!(output.heatmap, HeatmapLabel::Park);
    }

    #[tokio::test]
    async fn test_assumptions_do_not_share_quick_sessions() {
        let store = Arc::new(CannedStore::new());
        let use_case = QuickVoteUseCase::new(Arc::clone(&store), ScoringPolicy::default());

        use_case
            .execute(QuickVoteInput::new(AssumptionId::new(1), RaterId::new("U1"), 5, 5))
            .await
            .unwrap();
        let output = use_case
            .execute(QuickVoteInput::new(AssumptionId::new(2), RaterId::new("U1"), 1, 1))
            .await
            .unwrap();

        assert_eq!(output.result.count, 1);
    }

    #[tokio::test]
    async fn test_out_of_range_vote_is_rejected() {
        let store = Arc::new(CannedStore::new());
        let use_case = QuickVoteUseCase::new(store, ScoringPolicy::default());

        let err = use_case
            .execute(QuickVoteInput::new(AssumptionId::new(1), RaterId::new("U1"), 6, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, QuickVoteError::Submit(_)));
    }
}
