//! Load Error Types

use thiserror::Error;

/// Errors raised while reading a record source
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// Source missing or unreadable
    #[error("Data source {path} unavailable: {message}")]
    DataUnavailable { path: String, message: String },

    /// Header does not match the record schema
    #[error("Schema mismatch: missing columns {missing:?}, unexpected columns {unexpected:?}")]
    Schema {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// Row could not be parsed into a record
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

impl LoadError {
    /// Whether the header was at fault rather than the source or a row
    pub fn is_schema_error(&self) -> bool {
        matches!(self, LoadError::Schema { .. })
    }
}
