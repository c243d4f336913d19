//! Canned store for use-case unit tests
//!
//! Just enough behavior to drive the use cases; the real concurrency-safe
//! adapter lives in the infrastructure crate with its own tests.

use async_trait::async_trait;
use room_domain::{
    AssumptionId, Horizon, Scope, ScoreRecord, ScoringStore, Session, SessionId, StoreError,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct CannedState {
    sessions: Vec<Session>,
    scores: Vec<ScoreRecord>,
    horizons: BTreeMap<AssumptionId, Horizon>,
    next_id: u64,
}

#[derive(Default)]
pub struct CannedStore {
    state: Mutex<CannedState>,
}

impl CannedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open_session(self, id: u64, scope: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state
                .sessions
                .push(Session::open(SessionId::new(id), Scope::new(scope)));
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn with_revealed_session(self, id: u64, scope: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let mut session = Session::open(SessionId::new(id), Scope::new(scope));
            session.reveal();
            state.sessions.push(session);
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn score_rows(&self) -> Vec<ScoreRecord> {
        self.state.lock().unwrap().scores.clone()
    }

    pub fn horizon_of(&self, assumption: AssumptionId) -> Option<Horizon> {
        self.state.lock().unwrap().horizons.get(&assumption).copied()
    }
}

#[async_trait]
impl ScoringStore for CannedStore {
    async fn create_session(&self, scope: &Scope) -> Result<Session, StoreError> {
        let mut state = self.state.lock().unwrap();
        if state
            .sessions
            .iter()
            .any(|s| s.scope() == scope && s.is_open())
        {
            return Err(StoreError::ActiveSessionExists(scope.clone()));
        }
        state.next_id += 1;
        let session = Session::open(SessionId::new(state.next_id), scope.clone());
        state.sessions.push(session.clone());
        Ok(session)
    }

    async fn get_active_session(&self, scope: &Scope) -> Result<Option<Session>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sessions
            .iter()
            .find(|s| s.scope() == scope && s.is_open())
            .cloned())
    }

    async fn get_session(&self, id: SessionId) -> Result<Option<Session>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.sessions.iter().find(|s| s.id() == id).cloned())
    }

    async fn close_session(&self, id: SessionId) -> Result<Session, StoreError> {
        let mut state = self.state.lock().unwrap();
        let session = state
            .sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(StoreError::SessionNotFound(id))?;
        session.reveal();
        Ok(session.clone())
    }

    async fn upsert_score(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let session = state
            .sessions
            .iter()
            .find(|s| s.id() == record.session_id)
            .ok_or(StoreError::SessionNotFound(record.session_id))?;
        if !session.is_open() {
            return Err(StoreError::SessionClosed(record.session_id));
        }
        state.scores.retain(|s| s.key() != record.key());
        state.scores.push(record);
        Ok(())
    }

    async fn list_scores(&self, session_id: SessionId) -> Result<Vec<ScoreRecord>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .scores
            .iter()
            .filter(|s| s.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn update_assumption_horizon(
        &self,
        assumption_id: AssumptionId,
        horizon: Horizon,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.horizons.insert(assumption_id, horizon);
        Ok(())
    }
}
