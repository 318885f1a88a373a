//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through the ports.

pub mod triage;

pub use triage::{
    AdvanceDialogueCommand, AdvanceDialogueError, AdvanceDialogueHandler, AdvanceDialogueResult,
    SessionSummary, SummarizeSessionCommand, SummarizeSessionError, SummarizeSessionHandler,
};
