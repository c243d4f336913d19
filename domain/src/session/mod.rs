//! Scoring sessions and the store abstraction

pub mod entities;
pub mod repository;

pub use entities::{Session, SessionStatus};
pub use repository::{ScoringStore, StoreError};
