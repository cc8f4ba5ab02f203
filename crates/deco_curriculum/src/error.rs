//! Error types for curriculum operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for curriculum operations.
pub type CurriculumResult<T> = Result<T, CurriculumError>;

/// Errors that can occur while loading or querying a curriculum.
#[derive(Error, Debug)]
pub enum CurriculumError {
    #[error("Curriculum source not found at path: {0}")]
    SourceNotFound(PathBuf),

    #[error("No lesson with index {0} exists in the curriculum")]
    UnknownLesson(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
