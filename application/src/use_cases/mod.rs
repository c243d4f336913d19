//! Use cases for the scoring engine and sync resolution

pub mod quick_vote;
pub mod resolve_sync;
pub mod reveal_session;
pub mod shared;
pub mod start_session;
pub mod submit_score;

#[cfg(test)]
pub(crate) mod test_support;

pub use quick_vote::{QuickVoteError, QuickVoteInput, QuickVoteOutput, QuickVoteUseCase};
pub use resolve_sync::resolve_sync;
pub use reveal_session::{RevealError, RevealOutput, RevealSessionUseCase};
pub use start_session::{StartSessionError, StartSessionUseCase};
pub use submit_score::{SubmitScoreError, SubmitScoreInput, SubmitScoreUseCase};
