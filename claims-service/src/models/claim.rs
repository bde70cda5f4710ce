use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single insurance claim record as stored in the claims data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Claim {
    pub id: i64,
    pub policy_number: String,
    pub claimant_name: String,
    pub status: String,
    pub date_filed: DateTime<Utc>,
    pub amount: f64,
}

/// Envelope type matching the on-disk claims file layout.
#[derive(Debug, Deserialize)]
pub struct ClaimsFile {
    #[serde(rename = "Claims")]
    pub claims: Vec<Claim>,
}
