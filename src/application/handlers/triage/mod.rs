//! Triage dialogue handlers.

mod advance_dialogue;
mod summarize_session;

pub use advance_dialogue::{
    AdvanceDialogueCommand, AdvanceDialogueError, AdvanceDialogueHandler, AdvanceDialogueResult,
};
pub use summarize_session::{
    SessionSummary, SummarizeSessionCommand, SummarizeSessionError, SummarizeSessionHandler,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! Store doubles shared by the handler tests.

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::adapters::storage::InMemoryMemoryStore;
    use crate::domain::foundation::SessionKey;
    use crate::domain::triage::Turn;
    use crate::ports::{MemoryStore, PersistenceError};

    /// Store whose reads and/or writes can be made to fail.
    #[derive(Default)]
    pub struct FlakyStore {
        pub inner: InMemoryMemoryStore,
        pub fail_reads: bool,
        pub fail_writes: bool,
        pub append_attempts: AtomicUsize,
    }

    impl FlakyStore {
        pub fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        pub fn failing_reads() -> Self {
            Self {
                fail_reads: true,
                ..Default::default()
            }
        }

        pub fn append_attempts(&self) -> usize {
            self.append_attempts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MemoryStore for FlakyStore {
        async fn append(
            &self,
            key: &SessionKey,
            user_input: &str,
            ai_response: &str,
        ) -> Result<Turn, PersistenceError> {
            self.append_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(PersistenceError::Database("disk I/O error".to_string()));
            }
            self.inner.append(key, user_input, ai_response).await
        }

        async fn get(&self, key: &SessionKey) -> Result<Vec<Turn>, PersistenceError> {
            if self.fail_reads {
                return Err(PersistenceError::Database("database is locked".to_string()));
            }
            self.inner.get(key).await
        }
    }
}
