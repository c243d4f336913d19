//! Store adapters implementing [`room_domain::ScoringStore`]

pub mod memory;

pub use memory::MemoryStore;
