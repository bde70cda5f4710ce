//! Claim lookup from the static claims data file.

use super::RepositoryError;
use crate::models::{Claim, ClaimsFile};
use std::path::{Path, PathBuf};

/// Reads claims from a JSON data file.
///
/// The file is read per request so edits to the mock data take effect
/// without a restart.
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    path: PathBuf,
}

impl ClaimsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Look up a single claim by id.
    pub async fn claim_by_id(&self, id: i64) -> Result<Option<Claim>, RepositoryError> {
        let file = read_claims_file(&self.path).await?;
        Ok(file.claims.into_iter().find(|c| c.id == id))
    }

    /// Health check: the data file must exist.
    pub async fn health_check(&self) -> Result<(), RepositoryError> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            Ok(())
        } else {
            Err(RepositoryError::MissingDataFile(self.path.clone()))
        }
    }
}

async fn read_claims_file(path: &Path) -> Result<ClaimsFile, RepositoryError> {
    let data = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RepositoryError::MissingDataFile(path.to_path_buf())
        } else {
            RepositoryError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_str(&data).map_err(|e| RepositoryError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}
