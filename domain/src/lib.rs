//! Domain layer for decision-room
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Silent Scoring
//!
//! A team rates risk-laden assumptions across weighted criteria inside a
//! scoped session. Scores stay hidden until the session is revealed, then the
//! aggregated judgment (means, disagreement) drives prioritization:
//!
//! - **Session**: Open → Revealed lifecycle, at most one Open per scope
//! - **Aggregation**: per-criterion means plus a disagreement flag
//! - **Classification**: priority heatmap quadrant and urgency horizon
//!
//! ## Status Conflict Resolution
//!
//! A pure arbitration rule reconciling a local experiment with its mirror in
//! an external task tracker, with an asymmetric trust policy that prevents
//! the two systems from flapping.

pub mod classify;
pub mod core;
pub mod scoring;
pub mod session;
pub mod sync;

// Re-export commonly used types
pub use classify::{HeatmapLabel, Horizon, horizon_from_uncertainty};
pub use core::{AssumptionId, RaterId, Scope, SessionId, ValidationError};
pub use scoring::{
    AggregateResult, CriteriaScores, CriteriaSet, Criterion, ScoreBounds, ScoreRecord,
    ScoringPolicy, aggregate_by_assumption,
};
pub use session::{ScoringStore, Session, SessionStatus, StoreError};
pub use sync::{ExperimentStatus, SyncDecision, resolve_status_conflict};
