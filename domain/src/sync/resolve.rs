//! Status conflict resolution between a local experiment and its external mirror
//!
//! The trust policy is deliberately asymmetric: a remote completion event is
//! authoritative and closes local work, but remote incompletion never reopens
//! locally closed work. Without the asymmetry the two systems can oscillate,
//! each "correcting" the other forever.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local status of the unit of work mirrored in the external tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    Planning,
    Running,
    Completed,
    Archived,
}

impl ExperimentStatus {
    /// Terminal statuses expect no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExperimentStatus::Completed | ExperimentStatus::Archived)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentStatus::Planning => "planning",
            ExperimentStatus::Running => "running",
            ExperimentStatus::Completed => "completed",
            ExperimentStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperimentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(ExperimentStatus::Planning),
            "running" => Ok(ExperimentStatus::Running),
            "completed" => Ok(ExperimentStatus::Completed),
            "archived" => Ok(ExperimentStatus::Archived),
            _ => Err(format!(
                "Unknown experiment status: {}. Valid: planning, running, completed, archived",
                s
            )),
        }
    }
}

/// Resolution for a reported remote status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncDecision {
    /// Both sides agree; nothing to do.
    Noop,
    /// Local is closed but the remote mirror is still open; a human decides.
    Conflict,
    /// The remote mirror completed; close the local experiment.
    UpdateLocal,
}

impl fmt::Display for SyncDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncDecision::Noop => write!(f, "noop"),
            SyncDecision::Conflict => write!(f, "conflict"),
            SyncDecision::UpdateLocal => write!(f, "update_local"),
        }
    }
}

/// Reconcile local completion state with the external mirror's.
///
/// Ordered rule set; never fails. The `Conflict` case is surfaced to the
/// caller for human escalation, local closure is never silently reopened.
///
/// # Example
///
/// ```
/// use room_domain::sync::{ExperimentStatus, SyncDecision, resolve_status_conflict};
///
/// let decision = resolve_status_conflict(ExperimentStatus::Planning, true);
/// assert_eq!(decision, SyncDecision::UpdateLocal);
/// ```
pub fn resolve_status_conflict(local: ExperimentStatus, remote_done: bool) -> SyncDecision {
    match (local.is_terminal(), remote_done) {
        (true, true) => SyncDecision::Noop,
        (true, false) => SyncDecision::Conflict,
        (false, true) => SyncDecision::UpdateLocal,
        (false, false) => SyncDecision::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_done_is_noop() {
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Completed, true),
            SyncDecision::Noop
        );
    }

    #[test]
    fn test_local_done_remote_open_is_conflict() {
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Completed, false),
            SyncDecision::Conflict
        );
    }

    #[test]
    fn test_remote_done_closes_local() {
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Planning, true),
            SyncDecision::UpdateLocal
        );
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Running, true),
            SyncDecision::UpdateLocal
        );
    }

    #[test]
    fn test_neither_done_is_noop() {
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Planning, false),
            SyncDecision::Noop
        );
    }

    #[test]
    fn test_archived_behaves_like_completed() {
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Archived, true),
            SyncDecision::Noop
        );
        assert_eq!(
            resolve_status_conflict(ExperimentStatus::Archived, false),
            SyncDecision::Conflict
        );
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ExperimentStatus::Completed.is_terminal());
        assert!(ExperimentStatus::Archived.is_terminal());
        assert!(!ExperimentStatus::Planning.is_terminal());
        assert!(!ExperimentStatus::Running.is_terminal());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            "Completed".parse::<ExperimentStatus>().ok(),
            Some(ExperimentStatus::Completed)
        );
        assert!("done".parse::<ExperimentStatus>().is_err());
    }
}
