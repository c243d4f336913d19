//! Core domain primitives: identifiers and validation errors

pub mod error;
pub mod ids;

pub use error::ValidationError;
pub use ids::{AssumptionId, RaterId, Scope, SessionId};
