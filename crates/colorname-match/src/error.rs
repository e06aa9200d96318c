//! Error types for colorname-match

use thiserror::Error;

/// Errors that can occur while resolving a nearest color
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colorname_core::Error),

    /// No palette entries to search
    #[error("no palette available: cannot match against an empty palette")]
    EmptyPalette,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for match operations
pub type MatchResult<T> = Result<T, MatchError>;
