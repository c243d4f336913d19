//! Start Session use case

use room_domain::{RaterId, Scope, ScoringStore, Session, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when starting a session
#[derive(Error, Debug)]
pub enum StartSessionError {
    /// Another session is already Open for this scope. The caller must
    /// re-query current state before retrying.
    #[error("an open session already exists for scope {0}")]
    AlreadyActive(Scope),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// Use case for opening a scoring session within a scope.
///
/// The single-Open-session-per-scope invariant is enforced by the store's
/// atomic check-and-insert, so concurrent callers for one scope yield exactly
/// one Open session and every other caller gets [`StartSessionError::AlreadyActive`].
pub struct StartSessionUseCase<S: ScoringStore> {
    store: Arc<S>,
}

impl<S: ScoringStore> StartSessionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        scope: Scope,
        started_by: RaterId,
    ) -> Result<Session, StartSessionError> {
        match self.store.create_session(&scope).await {
            Ok(session) => {
                info!(
                    "Opened session {} for scope {} (started by {})",
                    session.id(),
                    scope,
                    started_by
                );
                Ok(session)
            }
            Err(StoreError::ActiveSessionExists(scope)) => {
                warn!("Scope {} already has an open session", scope);
                Err(StartSessionError::AlreadyActive(scope))
            }
            Err(e) => Err(StartSessionError::Store(e)),
        }
    }

    /// The Open session for a scope, if any.
    pub async fn get_active(&self, scope: &Scope) -> Result<Option<Session>, StartSessionError> {
        self.store
            .get_active_session(scope)
            .await
            .map_err(StartSessionError::Store)
    }
}
