//! Prompt assembly for claim-note summarization.

use crate::models::Note;

/// Fixed system instruction sent with every summarization request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an assistant that summarizes claim notes and provides next-step recommendations.";

/// A two-part chat prompt: system instruction plus user instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Serialize the notes into a prompt requesting a three-section response.
///
/// Callers guarantee a non-empty note set. Deterministic: the same notes in
/// the same order always produce the same prompt.
pub fn build_prompt(notes: &[Note]) -> Prompt {
    // Plain structs with chrono timestamps always serialize.
    let notes_json = serde_json::to_string(notes).expect("notes serialize to JSON");

    let user = format!(
        "List the original content of these claim notes: {}. \
         Summarize the notes. Provide a next-step recommendation. \
         Format the response as exactly three sections separated by a blank line, \
         in this order: original notes, summary, recommendation.",
        notes_json
    );

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}
