//! Error types for text generation.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while driving a text generator.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Text generator failed: {0}")]
    Generator(String),

    #[error("Generation request has no target words")]
    EmptyContract,
}
