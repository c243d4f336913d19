//! Consensus scoring: criteria, stored scores, policy and aggregation
//!
//! Raters score assumptions silently; aggregation reveals per-criterion means
//! and a disagreement flag once the session is revealed.

pub mod aggregate;
pub mod criteria;
pub mod policy;
pub mod score;

pub use aggregate::{AggregateResult, aggregate_by_assumption};
pub use criteria::{CriteriaScores, CriteriaSet, Criterion, ScoreBounds};
pub use policy::ScoringPolicy;
pub use score::ScoreRecord;
