//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation backends (OpenAI-compatible, Ollama, mock)
//! - `http` - REST API (axum)
//! - `sqlite` - Durable memory store (sqlx)
//! - `storage` - In-memory memory store

pub mod ai;
pub mod http;
pub mod sqlite;
pub mod storage;

pub use ai::{build_backend, MockGenerationBackend};
pub use sqlite::SqliteMemoryStore;
pub use storage::InMemoryMemoryStore;
