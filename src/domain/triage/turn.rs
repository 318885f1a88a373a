//! A single stored exchange of a triage session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// One patient input paired with the sanitized assistant reply.
///
/// Turns are created only after a successful generation and are never
/// modified once stored. `sequence` is assigned by the memory store and
/// orders replay; it grows monotonically within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub sequence: i64,
    pub user_input: String,
    pub ai_response: String,
    pub created_at: Timestamp,
}

impl Turn {
    /// Creates a turn stamped with the current time.
    pub fn new(sequence: i64, user_input: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self {
            sequence,
            user_input: user_input.into(),
            ai_response: ai_response.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Recreates a stored turn with its original timestamp.
    pub fn reconstitute(
        sequence: i64,
        user_input: String,
        ai_response: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            sequence,
            user_input,
            ai_response,
            created_at,
        }
    }

    /// Returns the exchange as a `(user_input, ai_response)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.user_input, &self.ai_response)
    }
}
