//! SQLite implementation of MemoryStore.
//!
//! One row per turn in `chat_memory`. The autoincrement `id` is the replay
//! ordinal; SQLite serializes writers, so appends to one session land in
//! call order.

use async_trait::async_trait;
use sqlx::Row;

use super::DbPool;
use crate::domain::foundation::{SessionKey, Timestamp};
use crate::domain::triage::Turn;
use crate::ports::{MemoryStore, PersistenceError};

/// SQLite implementation of MemoryStore.
#[derive(Clone)]
pub struct SqliteMemoryStore {
    pool: DbPool,
}

impl SqliteMemoryStore {
    /// Creates a new SqliteMemoryStore.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoryStore for SqliteMemoryStore {
    async fn append(
        &self,
        key: &SessionKey,
        user_input: &str,
        ai_response: &str,
    ) -> Result<Turn, PersistenceError> {
        let created_at = Timestamp::now();

        let result = sqlx::query(
            r#"
            INSERT INTO chat_memory (patient_id, session_id, user_input, ai_response, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(key.patient_id.as_str())
        .bind(key.session_id.as_str())
        .bind(user_input)
        .bind(ai_response)
        .bind(created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| PersistenceError::Database(format!("Failed to insert turn: {}", e)))?;

        Ok(Turn::reconstitute(
            result.last_insert_rowid(),
            user_input.to_string(),
            ai_response.to_string(),
            created_at,
        ))
    }

    async fn get(&self, key: &SessionKey) -> Result<Vec<Turn>, PersistenceError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_input, ai_response, created_at
            FROM chat_memory
            WHERE patient_id = ? AND session_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(key.patient_id.as_str())
        .bind(key.session_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PersistenceError::Database(format!("Failed to fetch turns: {}", e)))?;

        rows.iter()
            .map(|row| -> Result<Turn, PersistenceError> {
                let decode = |e: sqlx::Error| PersistenceError::Corrupt(e.to_string());
                let created_at: chrono::DateTime<chrono::Utc> =
                    row.try_get("created_at").map_err(decode)?;
                Ok(Turn::reconstitute(
                    row.try_get("id").map_err(decode)?,
                    row.try_get("user_input").map_err(decode)?,
                    row.try_get("ai_response").map_err(decode)?,
                    Timestamp::from_datetime(created_at),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{connect, init_schema};
    use std::time::Duration;

    async fn memory_pool() -> DbPool {
        // A single connection keeps the in-memory database alive and shared.
        let pool = connect("sqlite::memory:", 1, Duration::from_secs(5))
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    fn key(patient: &str, session: &str) -> SessionKey {
        SessionKey::parse(patient, session).unwrap()
    }

    #[tokio::test]
    async fn append_then_get_preserves_order() {
        let store = SqliteMemoryStore::new(memory_pool().await);
        let k = key("p1", "s1");

        for (input, reply) in [("A", "a"), ("B", "b"), ("C", "c")] {
            store.append(&k, input, reply).await.unwrap();
        }

        let turns = store.get(&k).await.unwrap();
        let pairs: Vec<_> = turns.iter().map(Turn::as_pair).collect();
        assert_eq!(pairs, vec![("A", "a"), ("B", "b"), ("C", "c")]);
    }

    #[tokio::test]
    async fn append_returns_assigned_sequence() {
        let store = SqliteMemoryStore::new(memory_pool().await);
        let first = store.append(&key("p1", "s1"), "A", "a").await.unwrap();
        let second = store.append(&key("p1", "s1"), "B", "b").await.unwrap();
        assert!(second.sequence > first.sequence);

        let stored = store.get(&key("p1", "s1")).await.unwrap();
        assert_eq!(stored[0].sequence, first.sequence);
        assert_eq!(stored[1].sequence, second.sequence);
    }

    #[tokio::test]
    async fn sessions_do_not_leak_between_patients() {
        let store = SqliteMemoryStore::new(memory_pool().await);
        store.append(&key("p1", "s1"), "mine", "r1").await.unwrap();
        store.append(&key("p2", "s1"), "theirs", "r2").await.unwrap();

        let turns = store.get(&key("p1", "s1")).await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user_input, "mine");
        assert!(store.get(&key("p3", "s1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn closed_pool_surfaces_database_error() {
        let pool = memory_pool().await;
        pool.close().await;
        let store = SqliteMemoryStore::new(pool);

        let err = store.append(&key("p1", "s1"), "A", "a").await.unwrap_err();
        assert!(matches!(err, PersistenceError::Database(_)));
        let err = store.get(&key("p1", "s1")).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Database(_)));
    }
}
