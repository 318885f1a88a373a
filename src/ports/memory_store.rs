//! Memory Store Port - Durable per-session conversation log.
//!
//! # Design
//!
//! - **Append-only**: turns are never updated or deleted
//! - **Session-scoped**: every call is keyed by `(patient_id, session_id)`
//! - **Ordered replay**: `get` returns turns in insertion order
//!
//! Implementations must keep distinct sessions independent under
//! concurrent callers. Writes to one session may be serialized.

use async_trait::async_trait;

use crate::domain::foundation::SessionKey;
use crate::domain::triage::Turn;

/// Repository port for session turns.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Appends one exchange to a session, creating the session implicitly.
    ///
    /// Returns the stored turn with its assigned sequence number.
    async fn append(
        &self,
        key: &SessionKey,
        user_input: &str,
        ai_response: &str,
    ) -> Result<Turn, PersistenceError>;

    /// Returns every turn of a session, oldest first.
    ///
    /// An unknown session yields an empty list.
    async fn get(&self, key: &SessionKey) -> Result<Vec<Turn>, PersistenceError>;
}

/// Memory store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// The backing database is unavailable or rejected the statement.
    #[error("database error: {0}")]
    Database(String),

    /// A stored row could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn MemoryStore) {}
    }

    #[test]
    fn persistence_error_displays_detail() {
        let err = PersistenceError::Database("disk full".to_string());
        assert_eq!(err.to_string(), "database error: disk full");
    }
}
