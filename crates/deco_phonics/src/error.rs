//! Error types for phonics operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for phonics operations.
pub type PhonicsResult<T> = Result<T, PhonicsError>;

/// Errors that can occur while loading pronunciation data or building
/// orthographic patterns.
#[derive(Error, Debug)]
pub enum PhonicsError {
    #[error("Pronunciation source not found at path: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid orthographic pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
