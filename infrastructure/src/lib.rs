//! Infrastructure layer for decision-room
//!
//! Adapters behind the domain's [`room_domain::ScoringStore`] trait plus
//! configuration loading. The in-memory store is prototype-grade: adequate
//! for a single instance, replaced by a shared database in production.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FilePolicyConfig};
pub use store::MemoryStore;
