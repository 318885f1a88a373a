//! In-Memory Memory Store Adapter
//!
//! Stores session turns in memory. Nothing survives a restart, so this is
//! for tests and throwaway deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionKey;
use crate::domain::triage::Turn;
use crate::ports::{MemoryStore, PersistenceError};

/// In-memory turn log keyed by session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemoryStore {
    sessions: Arc<RwLock<HashMap<SessionKey, Vec<Turn>>>>,
    last_sequence: Arc<AtomicI64>,
}

impl InMemoryMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with at least one turn
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Total number of stored turns across all sessions
    pub async fn turn_count(&self) -> usize {
        self.sessions.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl MemoryStore for InMemoryMemoryStore {
    async fn append(
        &self,
        key: &SessionKey,
        user_input: &str,
        ai_response: &str,
    ) -> Result<Turn, PersistenceError> {
        let mut sessions = self.sessions.write().await;
        // Sequence is taken under the write lock so per-session order matches it.
        let sequence = self.last_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let turn = Turn::new(sequence, user_input, ai_response);
        sessions.entry(key.clone()).or_default().push(turn.clone());
        Ok(turn)
    }

    async fn get(&self, key: &SessionKey) -> Result<Vec<Turn>, PersistenceError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(key).cloned().unwrap_or_default())
    }
}
