//! Completion provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over the generative-model
//! call, allowing easy swapping between backends (Azure OpenAI, mock).

pub mod azure_openai;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Provider returned no completion choices")]
    EmptyCompletion,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for chat-completion providers (e.g. Azure OpenAI).
///
/// One call per summarization request; retry and backoff policy is the
/// caller's concern.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Perform a single completion round trip and return the first
    /// candidate's text content.
    async fn complete(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
