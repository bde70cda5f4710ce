//! The note-summarization pipeline.
//!
//! Orchestrates prompt assembly, the completion call, and response parsing
//! into a single unit of work per request. No state is shared across
//! requests; concurrent summarizations are independent.

pub mod parser;
pub mod prompt;

use crate::models::Note;
use crate::services::providers::{CompletionClient, ProviderError};
use std::sync::Arc;
use thiserror::Error;

pub use parser::{parse_sections, ParsedSections};
pub use prompt::{build_prompt, Prompt, SYSTEM_INSTRUCTION};

/// Error type for summarization.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The claim has no notes; nothing to summarize.
    #[error("No notes found for claim {0}")]
    NoNotes(i64),

    /// The completion provider failed. Surfaced unchanged; retry policy is
    /// the caller's concern.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// The structured result of one successful summarization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub claim_id: i64,
    pub original_notes: String,
    pub summary: String,
    pub recommendation: String,
}

/// Orchestrates prompt building, completion, and parsing.
#[derive(Clone)]
pub struct Summarizer {
    client: Arc<dyn CompletionClient>,
}

impl Summarizer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Summarize the notes of one claim.
    ///
    /// Fails with [`SummarizeError::NoNotes`] before any prompt is built if
    /// the note set is empty. Provider failures propagate unchanged; parsing
    /// never fails, falling back to fixed placeholder strings per missing
    /// section.
    #[tracing::instrument(skip(self, notes), fields(note_count = notes.len()))]
    pub async fn summarize(
        &self,
        claim_id: i64,
        notes: &[Note],
    ) -> Result<SummaryResult, SummarizeError> {
        if notes.is_empty() {
            return Err(SummarizeError::NoNotes(claim_id));
        }

        let prompt = build_prompt(notes);

        let raw = self.client.complete(&prompt.system, &prompt.user).await?;

        tracing::debug!(claim_id, response_len = raw.len(), "Completion received");

        let sections = parse_sections(&raw);

        Ok(SummaryResult {
            claim_id,
            original_notes: sections.original_notes,
            summary: sections.summary,
            recommendation: sections.recommendation,
        })
    }

    /// Health check delegated to the underlying provider.
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.client.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::{FailingCompletionClient, MockCompletionClient};
    use chrono::{TimeZone, Utc};

    fn note(id: i64, claim_id: i64, content: &str) -> Note {
        Note {
            id,
            claim_id,
            content: content.to_string(),
            created_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn returns_input_claim_id_on_success() {
        let client =
            MockCompletionClient::with_response("notes\n\nsummary\n\nrecommendation");
        let summarizer = Summarizer::new(client);

        let result = summarizer
            .summarize(7, &[note(1, 7, "Water damage.")])
            .await
            .unwrap();

        assert_eq!(result.claim_id, 7);
        assert_eq!(result.original_notes, "notes");
        assert_eq!(result.summary, "summary");
        assert_eq!(result.recommendation, "recommendation");
    }

    #[tokio::test]
    async fn empty_notes_fail_without_invoking_client() {
        let client = MockCompletionClient::with_response("unused");
        let summarizer = Summarizer::new(client.clone());

        let result = summarizer.summarize(7, &[]).await;

        assert!(matches!(result, Err(SummarizeError::NoNotes(7))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_outage_propagates_unchanged() {
        let summarizer = Summarizer::new(Arc::new(FailingCompletionClient));

        let result = summarizer.summarize(7, &[note(1, 7, "Anything.")]).await;

        assert!(matches!(
            result,
            Err(SummarizeError::Provider(ProviderError::NetworkError(_)))
        ));
    }

    #[tokio::test]
    async fn partial_response_uses_fallbacks() {
        let client = MockCompletionClient::with_response("Only one paragraph.");
        let summarizer = Summarizer::new(client);

        let result = summarizer
            .summarize(3, &[note(1, 3, "Single note.")])
            .await
            .unwrap();

        assert_eq!(result.original_notes, "Only one paragraph.");
        assert_eq!(result.summary, parser::NO_SUMMARY);
        assert_eq!(result.recommendation, parser::NO_RECOMMENDATION);
    }

    #[tokio::test]
    async fn prompt_sent_to_client_contains_note_content() {
        let client =
            MockCompletionClient::with_response("notes\n\nsummary\n\nrecommendation");
        let summarizer = Summarizer::new(client.clone());

        summarizer
            .summarize(7, &[note(1, 7, "Hail damage to the roof.")])
            .await
            .unwrap();

        let sent = client.last_user_instruction().unwrap();
        assert!(sent.contains("Hail damage to the roof."));
        assert_eq!(client.call_count(), 1);
    }
}
