//! Pipeline Error Types

use dataset::LoadError;
use feature_engine::{EnrichError, QueryError};
use thiserror::Error;

/// Errors surfaced while preparing or querying the dashboard data
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Enrich(#[from] EnrichError),

    #[error(transparent)]
    Query(#[from] QueryError),
}
