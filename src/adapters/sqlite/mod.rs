//! SQLite adapters - Durable implementations of repository ports.
//!
//! - `SqliteMemoryStore` - Append-only `chat_memory` table
//!
//! The schema is created in place with `CREATE TABLE IF NOT EXISTS`; rows
//! are never migrated or deleted.

mod memory_store;

pub use memory_store::SqliteMemoryStore;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Connection pool type used by the SQLite adapters.
pub type DbPool = sqlx::SqlitePool;

/// Opens a connection pool, creating the database file if missing.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}

/// Creates the turn log table and its replay index if they do not exist.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chat_memory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id TEXT NOT NULL,
            session_id TEXT NOT NULL,
            user_input TEXT NOT NULL,
            ai_response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_chat_memory_session
        ON chat_memory (patient_id, session_id, id)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
