//! Azure OpenAI provider implementation.
//!
//! Implements chat completion against an Azure OpenAI deployment using the
//! REST chat-completions API.

use super::{CompletionClient, ProviderError};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Azure OpenAI completion client.
pub struct AzureOpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

impl AzureOpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the chat-completions URL for the configured deployment.
    fn api_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_instruction.to_string(),
                },
            ],
        };

        let url = self.api_url();

        tracing::debug!(
            deployment = %self.config.deployment,
            prompt_len = user_instruction.len(),
            "Sending request to Azure OpenAI"
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let api_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::NetworkError(format!("Failed to parse response: {}", e))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyCompletion)?;

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(ProviderError::ContentFiltered);
        }

        match choice.message.content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ProviderError::EmptyCompletion),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Azure OpenAI API key not configured".to_string(),
            ));
        }
        if self.config.endpoint.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Azure OpenAI endpoint not configured".to_string(),
            ));
        }
        if self.config.deployment.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Azure OpenAI deployment not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Azure OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OpenAiConfig {
        OpenAiConfig {
            endpoint: "https://example.openai.azure.com/".to_string(),
            api_key: "test-key".to_string(),
            deployment: "gpt-4o-mini".to_string(),
            api_version: "2024-02-01".to_string(),
        }
    }

    #[test]
    fn api_url_strips_trailing_slash() {
        let client = AzureOpenAiClient::new(test_config());
        assert_eq!(
            client.api_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions?api-version=2024-02-01"
        );
    }

    #[tokio::test]
    async fn health_check_rejects_missing_key() {
        let mut config = test_config();
        config.api_key = String::new();
        let client = AzureOpenAiClient::new(config);
        assert!(matches!(
            client.health_check().await,
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn response_with_no_choices_deserializes() {
        let parsed: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
