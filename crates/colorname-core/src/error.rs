//! Error types for colorname-core
//!
//! Palette load failures carry the row index (0-based position in the
//! input sequence) and the offending field name so that a human can fix
//! the source table. Every load error is fatal to the whole load: no
//! partial palettes are ever produced.

use thiserror::Error;

/// colorname-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source contained no rows at all
    #[error("palette source is empty: no rows to load")]
    EmptySource,

    /// A required field is absent from a row (schema mismatch)
    #[error("row {row}: missing column '{field}'")]
    MissingColumn { row: usize, field: &'static str },

    /// A color component parsed as an integer but lies outside [0, 255]
    #[error("row {row}: {field} value {value} is outside [0, 255]")]
    OutOfRangeValue {
        row: usize,
        field: &'static str,
        value: i64,
    },

    /// A field could not be interpreted (non-integer component, blank name)
    #[error("row {row}: malformed {field} value '{value}'")]
    MalformedRow {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Index out of bounds
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A query color string could not be parsed
    #[error("invalid query color: '{0}'")]
    InvalidQuery(String),
}

/// Result type alias for colorname-core operations
pub type Result<T> = std::result::Result<T, Error>;
