//! Mock Generation Backend for testing.
//!
//! Scriptable implementation of the GenerationBackend port so handler and
//! HTTP tests run without a model server.
//!
//! # Example
//!
//! ```ignore
//! let backend = MockGenerationBackend::new()
//!     .with_reply("How long have you had the headache?")
//!     .with_error(GenerationError::network("connection refused"));
//!
//! let first = backend.generate(request.clone()).await?;
//! let second = backend.generate(request).await; // Err(Network)
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    BackendInfo, GenerationBackend, GenerationError, GenerationRequest, GenerationResponse,
};

/// Reply returned when the queue is exhausted.
const DEFAULT_REPLY: &str = "Mock response";

/// A queued mock outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Success(String),
    /// Fail with this error.
    Error(GenerationError),
}

/// Mock backend. Replies are consumed in order; every request is recorded.
#[derive(Debug, Clone)]
pub struct MockGenerationBackend {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
    delay: Duration,
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerationBackend {
    /// Creates a mock with an empty queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
        }
    }

    /// Queues a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        lock(&self.replies).push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        lock(&self.replies).push_back(MockReply::Error(error));
        self
    }

    /// Adds simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns a copy of every request received so far.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        lock(&self.calls).clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Prompt of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.calls).last().map(|r| r.prompt.clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = lock(&self.replies).pop_front();
        match next {
            Some(MockReply::Success(content)) => Ok(GenerationResponse::new(content, "mock-model-1")),
            Some(MockReply::Error(err)) => Err(err),
            None => Ok(GenerationResponse::new(DEFAULT_REPLY, "mock-model-1")),
        }
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo::new("mock", "mock-model-1")
    }
}
