//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers hold their collaborators as `Arc<dyn Port>` and never read
//! configuration themselves.

pub mod handlers;

pub use handlers::{
    AdvanceDialogueCommand, AdvanceDialogueError, AdvanceDialogueHandler, AdvanceDialogueResult,
    SessionSummary, SummarizeSessionCommand, SummarizeSessionError, SummarizeSessionHandler,
};
