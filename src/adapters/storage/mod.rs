//! Storage Adapters
//!
//! In-process implementations of the MemoryStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryMemoryStore** - Keeps turns in memory (testing/development)
//!
//! The durable implementation lives in `adapters::sqlite`.

mod in_memory_memory_store;

pub use in_memory_memory_store::InMemoryMemoryStore;
