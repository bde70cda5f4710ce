//! Note lookup from the static notes data file.

use super::RepositoryError;
use crate::models::{Note, NotesFile};
use std::path::{Path, PathBuf};

/// Reads claim notes from a JSON data file.
#[derive(Debug, Clone)]
pub struct NotesRepository {
    path: PathBuf,
}

impl NotesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the notes belonging to one claim, in file order.
    ///
    /// May be empty. Never includes notes whose claim id differs from the
    /// argument.
    pub async fn notes_for_claim(&self, claim_id: i64) -> Result<Vec<Note>, RepositoryError> {
        let file = read_notes_file(&self.path).await?;
        Ok(file
            .notes
            .into_iter()
            .filter(|n| n.claim_id == claim_id)
            .collect())
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

async fn read_notes_file(path: &Path) -> Result<NotesFile, RepositoryError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "Notes": [
            { "Id": 1, "ClaimId": 1, "Content": "First note.", "CreatedDate": "2024-01-16T09:30:00Z" },
            { "Id": 2, "ClaimId": 2, "Content": "Other claim.", "CreatedDate": "2024-01-17T10:00:00Z" },
            { "Id": 3, "ClaimId": 1, "Content": "Second note.", "CreatedDate": "2024-01-18T11:15:00Z" }
        ]
    }"#;

    fn notes_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn filters_by_claim_id_preserving_order() {
        let file = notes_file(SAMPLE);
        let repo = NotesRepository::new(file.path());

        let notes = repo.notes_for_claim(1).await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].content, "First note.");
        assert_eq!(notes[1].content, "Second note.");
        assert!(notes.iter().all(|n| n.claim_id == 1));
    }

    #[tokio::test]
    async fn claim_without_notes_returns_empty() {
        let file = notes_file(SAMPLE);
        let repo = NotesRepository::new(file.path());

        assert!(repo.notes_for_claim(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let repo = NotesRepository::new("/nonexistent/notes.json");

        assert!(matches!(
            repo.notes_for_claim(1).await,
            Err(RepositoryError::MissingDataFile(_))
        ));
    }
}
