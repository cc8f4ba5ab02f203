//! Error types for corpus operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors that can occur while loading sources or building corpora.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus source not found at path: {0}")]
    SourceNotFound(PathBuf),

    #[error("Curriculum error: {0}")]
    Curriculum(#[from] deco_curriculum::CurriculumError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
