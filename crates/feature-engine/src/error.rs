//! Enrichment and Query Error Types

use thiserror::Error;

/// Errors while deriving features from a record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnrichError {
    /// Product code missing from the price catalog
    #[error("Unknown product code {0:?}")]
    UnknownProductCode(String),

    /// Age outside every configured bin
    #[error("Age {age} is outside the supported range [{min}, {max}]")]
    UnboundedAge { age: u32, min: u32, max: u32 },

    /// Fitness self-rating outside 1-5
    #[error("Fitness rating {0} is outside the 1-5 scale")]
    InvalidFitnessRating(u8),
}

/// Errors raised by queries against an enriched dataset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Field used where its kind does not fit
    #[error("Field {field} is not {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// Field name not in the record schema
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
