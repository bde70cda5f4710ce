use axum::{extract::Path, extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

use crate::dtos::{ClaimResponse, ErrorResponse, SummaryResponse};
use crate::services::summarizer::SummarizeError;
use crate::services::providers::ProviderError;
use crate::services::RepositoryError;
use crate::AppState;

/// Look up the status of one claim
#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    params(
        ("id" = i64, Path, description = "Claim identifier")
    ),
    responses(
        (status = 200, description = "Claim found", body = ClaimResponse),
        (status = 400, description = "Invalid claim id", body = ErrorResponse),
        (status = 404, description = "Claim or claims data not found", body = ErrorResponse)
    ),
    tag = "Claims"
)]
#[axum::debug_handler]
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(claim_id = id, "Claim lookup requested");

    if id <= 0 {
        tracing::warn!(claim_id = id, "Invalid claim id");
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Invalid claim id provided: {}",
            id
        )));
    }

    let claim = state
        .claims
        .claim_by_id(id)
        .await
        .map_err(repository_error)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Claim with id {} not found", id)))?;

    tracing::info!(claim_id = id, "Claim retrieved");
    Ok(Json(ClaimResponse::from(claim)))
}

/// Summarize the notes of one claim
#[utoipa::path(
    post,
    path = "/api/claims/{id}/summarize",
    params(
        ("id" = i64, Path, description = "Claim identifier")
    ),
    responses(
        (status = 200, description = "Summary generated", body = SummaryResponse),
        (status = 400, description = "Invalid claim id", body = ErrorResponse),
        (status = 404, description = "No notes found for the claim", body = ErrorResponse),
        (status = 429, description = "Rate limited by the completion provider", body = ErrorResponse),
        (status = 502, description = "Completion provider failed", body = ErrorResponse)
    ),
    tag = "Claims"
)]
#[axum::debug_handler]
pub async fn summarize_claim_notes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if id <= 0 {
        tracing::warn!(claim_id = id, "Invalid claim id");
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Invalid claim id provided: {}",
            id
        )));
    }

    let notes = state
        .notes
        .notes_for_claim(id)
        .await
        .map_err(repository_error)?;

    tracing::info!(claim_id = id, note_count = notes.len(), "Generating summary");

    let result = state
        .summarizer
        .summarize(id, &notes)
        .await
        .map_err(|e| match e {
            SummarizeError::NoNotes(id) => {
                AppError::NotFound(anyhow::anyhow!("Notes for claim id {} not found", id))
            }
            SummarizeError::Provider(ProviderError::RateLimited) => AppError::TooManyRequests(
                "Rate limited by the completion provider".to_string(),
                None,
            ),
            SummarizeError::Provider(p) => {
                tracing::error!(claim_id = id, error = %p, "Completion provider failed");
                AppError::BadGateway(p.to_string())
            }
        })?;

    tracing::info!(claim_id = id, "Summary and recommendation generated");
    Ok(Json(SummaryResponse::from(result)))
}

fn repository_error(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::MissingDataFile(path) => {
            tracing::warn!(path = %path.display(), "Data file not found");
            AppError::NotFound(anyhow::anyhow!(
                "Data set not found: {}",
                path.display()
            ))
        }
        other => {
            tracing::error!(error = %other, "Failed to read data file");
            AppError::InternalError(anyhow::Error::new(other))
        }
    }
}
