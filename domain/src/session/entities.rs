//! Session domain entities

use crate::core::{Scope, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a scoring session.
///
/// `Revealed` is terminal: a session is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Open,
    Revealed,
}

impl SessionStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Open => write!(f, "open"),
            SessionStatus::Revealed => write!(f, "revealed"),
        }
    }
}

/// A scoring session (Entity).
///
/// Scoped to a team/channel boundary; at most one session per scope is Open
/// at any time (enforced by the store's atomic check-and-insert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    scope: Scope,
    status: SessionStatus,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn open(id: SessionId, scope: Scope) -> Self {
        Self {
            id,
            scope,
            status: SessionStatus::Open,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Transition Open → Revealed.
    ///
    /// Idempotent at the state level: revealing an already-revealed session
    /// is a no-op transition, not an error.
    pub fn reveal(&mut self) {
        self.status = SessionStatus::Revealed;
    }
}
