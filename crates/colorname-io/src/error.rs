//! I/O error types
//!
//! Provides a unified error type for reading and writing palette tables.
//! Validation failures of the rows themselves come back from the core
//! crate and are wrapped unchanged, so callers still see the row index
//! and field name.

use thiserror::Error;

/// Error type for palette I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is structurally invalid (too large, not UTF-8)
    #[error("invalid palette data: {0}")]
    InvalidData(String),

    /// The table text could not be split into records
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library (row validation)
    #[error("core error: {0}")]
    Core(#[from] colorname_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
