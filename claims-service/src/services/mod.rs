pub mod claims_repository;
pub mod notes_repository;
pub mod providers;
pub mod summarizer;

pub use claims_repository::ClaimsRepository;
pub use notes_repository::NotesRepository;
pub use summarizer::Summarizer;

use std::path::PathBuf;
use thiserror::Error;

/// Error type for the data-file repositories.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Data file not found: {0}")]
    MissingDataFile(PathBuf),

    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed data file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
