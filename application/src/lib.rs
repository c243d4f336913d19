//! Application layer for decision-room
//!
//! This crate contains the use cases driving the consensus scoring engine.
//! It depends only on the domain layer; persistence arrives through the
//! domain's [`room_domain::ScoringStore`] trait.
//!
//! Every inbound action (a session start, a rater's submission, a reveal
//! request) is an independent short-lived unit of work; the store is the
//! sole coordination point and no use case holds a lock across a call.

pub mod use_cases;

// Re-export commonly used types
pub use use_cases::{
    QuickVoteError, QuickVoteInput, QuickVoteOutput, QuickVoteUseCase, RevealError, RevealOutput,
    RevealSessionUseCase, StartSessionError, StartSessionUseCase, SubmitScoreError,
    SubmitScoreInput, SubmitScoreUseCase, resolve_sync,
};
