//! In-memory scoring store
//!
//! Prototype-grade adapter backed by a single async mutex. Every trait method
//! runs inside one critical section, which is what makes the check-and-insert
//! and upsert atomic; no lock is ever held across an await that leaves the
//! store. A shared database with a unique (scope, open) constraint replaces
//! this in production — this adapter is never authoritative for derived data.

use async_trait::async_trait;
use room_domain::{
    AssumptionId, Horizon, RaterId, Scope, ScoreRecord, ScoringStore, Session, SessionId,
    StoreError,
};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct MemoryState {
    sessions: BTreeMap<SessionId, Session>,
    scores: BTreeMap<(SessionId, AssumptionId, RaterId), ScoreRecord>,
    horizons: BTreeMap<AssumptionId, Horizon>,
    next_session_id: u64,
}

/// In-memory [`ScoringStore`] implementation.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizon attribute of an assumption, if one was ever written.
    pub async fn assumption_horizon(&self, assumption_id: AssumptionId) -> Option<Horizon> {
        self.state.lock().await.horizons.get(&assumption_id).copied()
    }
}

#[async_trait]
impl ScoringStore for MemoryStore {
    async fn create_session(&self, scope: &Scope) -> Result<Session, StoreError> {
        let mut state = self.state.lock().await;

        // Check-and-insert under the same lock: two concurrent starts for one
        // scope cannot both observe "no active session".
        if state
            .sessions
            .values()
            .any(|s| s.scope() == scope && s.is_open())
        {
            return Err(StoreError::ActiveSessionExists(scope.clone()));
        }

        state.next_session_id += 1;
        let session = Session::open(SessionId::new(state.next_session_id), scope.clone());
        state.sessions.insert(session.id(), session.clone());
        debug!("Created session {} for scope {}", session.id(), scope);
        Ok(session)
    }

    async fn get_active_session(&self, scope: &Scope) -> Result<Option<Session>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .sessions
            .values()
            .find(|s| s.scope() == scope && s.is_open())
            .cloned())
    }

    async fn get_session(&self, id: SessionId) -> Result<Option<Session>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.sessions.get(&id).cloned())
    }

    async fn close_session(&self, id: SessionId) -> Result<Session, StoreError> {
        let mut state = self.state.lock().await;
        let session = state
            .sessions
            .get_mut(&id)
            .ok_or(StoreError::SessionNotFound(id))?;
        if session.is_open() {
            session.reveal();
            debug!("Session {} revealed", id);
        }
        Ok(session.clone())
    }

    async fn upsert_score(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;

        // Status check and write share the critical section: a score either
        // commits strictly before the reveal transition or fails closed.
        let session = state
            .sessions
            .get(&record.session_id)
            .ok_or(StoreError::SessionNotFound(record.session_id))?;
        if !session.is_open() {
            return Err(StoreError::SessionClosed(record.session_id));
        }

        debug!(
            "Upserting score for assumption {} by {} in session {}",
            record.assumption_id, record.rater_id, record.session_id
        );
        state.scores.insert(record.key(), record);
        Ok(())
    }

    async fn list_scores(&self, session_id: SessionId) -> Result<Vec<ScoreRecord>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .scores
            .values()
            .filter(|s| s.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn update_assumption_horizon(
        &self,
        assumption_id: AssumptionId,
        horizon: Horizon,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.horizons.insert(assumption_id, horizon);
        debug!("Assumption {} horizon set to {}", assumption_id, horizon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_domain::CriteriaScores;

    fn record(session: SessionId, assumption: u64, rater: &str) -> ScoreRecord {
        ScoreRecord::new(
            session,
            AssumptionId::new(assumption),
            RaterId::new(rater),
            CriteriaScores::full(3, 3, 3, 3),
        )
    }

    #[tokio::test]
    async fn test_create_session_enforces_single_open_per_scope() {
        let store = MemoryStore::new();
        let scope = Scope::new("C1");

        store.create_session(&scope).await.unwrap();
        let err = store.create_session(&scope).await.unwrap_err();
        assert_eq!(err, StoreError::ActiveSessionExists(scope));
    }

    #[tokio::test]
    async fn test_new_session_allowed_after_reveal() {
        let store = MemoryStore::new();
        let scope = Scope::new("C1");

        let first = store.create_session(&scope).await.unwrap();
        store.close_session(first.id()).await.unwrap();

        let second = store.create_session(&scope).await.unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_close_session_is_idempotent() {
        let store = MemoryStore::new();
        let session = store.create_session(&Scope::new("C1")).await.unwrap();

        let once = store.close_session(session.id()).await.unwrap();
        let twice = store.close_session(session.id()).await.unwrap();
        assert_eq!(once.status(), twice.status());
    }

    #[tokio::test]
    async fn test_upsert_replaces_row_with_same_key() {
        let store = MemoryStore::new();
        let session = store.create_session(&Scope::new("C1")).await.unwrap();

        store.upsert_score(record(session.id(), 7, "U1")).await.unwrap();
        let mut replacement = record(session.id(), 7, "U1");
        replacement.criteria = CriteriaScores::full(5, 5, 5, 5);
        store.upsert_score(replacement).await.unwrap();

        let rows = store.list_scores(session.id()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].criteria, CriteriaScores::full(5, 5, 5, 5));
    }

    #[tokio::test]
    async fn test_upsert_into_revealed_session_fails_closed() {
        let store = MemoryStore::new();
        let session = store.create_session(&Scope::new("C1")).await.unwrap();
        store.close_session(session.id()).await.unwrap();

        let err = store
            .upsert_score(record(session.id(), 7, "U1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::SessionClosed(session.id()));
    }

    #[tokio::test]
    async fn test_upsert_into_missing_session_fails() {
        let store = MemoryStore::new();
        let err = store
            .upsert_score(record(SessionId::new(42), 7, "U1"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::SessionNotFound(SessionId::new(42)));
    }

    #[tokio::test]
    async fn test_list_scores_is_scoped_to_the_session() {
        let store = MemoryStore::new();
        let a = store.create_session(&Scope::new("C1")).await.unwrap();
        let b = store.create_session(&Scope::new("C2")).await.unwrap();

        store.upsert_score(record(a.id(), 7, "U1")).await.unwrap();
        store.upsert_score(record(b.id(), 7, "U1")).await.unwrap();

        assert_eq!(store.list_scores(a.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_horizon_overwrites_prior_classification() {
        let store = MemoryStore::new();
        let id = AssumptionId::new(7);

        store.update_assumption_horizon(id, Horizon::Later).await.unwrap();
        store.update_assumption_horizon(id, Horizon::Now).await.unwrap();

        assert_eq!(store.assumption_horizon(id).await, Some(Horizon::Now));
    }
}
