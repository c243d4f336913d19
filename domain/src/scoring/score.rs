//! Stored score entity

use super::criteria::CriteriaScores;
use crate::core::{AssumptionId, RaterId, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rater's stored score for one assumption within one session (Entity).
///
/// Unique per (session, assumption, rater); a resubmission overwrites the
/// stored row rather than adding a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub session_id: SessionId,
    pub assumption_id: AssumptionId,
    pub rater_id: RaterId,
    pub criteria: CriteriaScores,
    pub rationale: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ScoreRecord {
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
            submitted_at: Utc::now(),
        }
    }

    /// Attach the rater's free-text rationale.
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// The upsert key: (session, assumption, rater).
    pub fn key(&self) -> (SessionId, AssumptionId, RaterId) {
        (self.session_id, self.assumption_id, self.rater_id.clone())
    }
}
