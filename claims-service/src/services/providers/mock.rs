//! Mock completion clients for testing.

use super::{CompletionClient, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock completion client returning a canned response.
///
/// Records how many times it was invoked and the last user instruction it
/// received, so tests can assert on call counts and prompt content.
pub struct MockCompletionClient {
    response: String,
    calls: AtomicUsize,
    last_user_instruction: Mutex<Option<String>>,
}

impl MockCompletionClient {
    pub fn with_response(response: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
            last_user_instruction: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_instruction(&self) -> Option<String> {
        self.last_user_instruction
            .lock()
            .expect("mock lock poisoned")
            .clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        _system_instruction: &str,
        user_instruction: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_user_instruction
            .lock()
            .expect("mock lock poisoned") = Some(user_instruction.to_string());
        Ok(self.response.clone())
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Mock completion client simulating a provider outage.
pub struct FailingCompletionClient;

#[async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(
        &self,
        _system_instruction: &str,
        _user_instruction: &str,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::NetworkError(
            "simulated provider outage".to_string(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Err(ProviderError::NetworkError(
            "simulated provider outage".to_string(),
        ))
    }
}

/// Mock completion client simulating a quota/rate-limit condition.
pub struct RateLimitedCompletionClient;

#[async_trait]
impl CompletionClient for RateLimitedCompletionClient {
    async fn complete(
        &self,
        _system_instruction: &str,
        _user_instruction: &str,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::RateLimited)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
