use crate::models::Claim;
use crate::services::summarizer::SummaryResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claim-status lookup response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: i64,
    pub policy_number: String,
    pub claimant_name: String,
    pub status: String,
    pub date_filed: DateTime<Utc>,
    pub amount: f64,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            policy_number: claim.policy_number,
            claimant_name: claim.claimant_name,
            status: claim.status,
            date_filed: claim.date_filed,
            amount: claim.amount,
        }
    }
}

/// Note-summarization response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub claim_id: i64,
    pub original_notes: String,
    pub summary: String,
    pub recommendation: String,
}

impl From<SummaryResult> for SummaryResponse {
    fn from(result: SummaryResult) -> Self {
        Self {
            claim_id: result.claim_id,
            original_notes: result.original_notes,
            summary: result.summary,
            recommendation: result.recommendation,
        }
    }
}

/// Standard error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
