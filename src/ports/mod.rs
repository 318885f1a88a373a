//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialogue handlers and the outside world. Adapters implement these
//! ports.
//!
//! - `GenerationBackend` - Text generation by a language-model provider
//! - `MemoryStore` - Durable, append-only per-session turn log

mod generation_backend;
mod memory_store;

pub use generation_backend::{
    BackendInfo, GenerationBackend, GenerationError, GenerationRequest, GenerationResponse,
};
pub use memory_store::{MemoryStore, PersistenceError};
