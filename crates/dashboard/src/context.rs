//! Shared Analytics Context

use crate::error::PipelineError;
use feature_engine::{EnrichedDataset, Enricher, PredicateSet, QueryError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Enriched dataset prepared once and shared read-only by every view
#[derive(Debug, Clone)]
pub struct AnalyticsContext {
    dataset: Arc<EnrichedDataset>,
}

impl AnalyticsContext {
    /// Load and enrich the CSV at `path`
    pub fn open(path: impl AsRef<Path>, enricher: &Enricher) -> Result<Self, PipelineError> {
        let raw = dataset::load_path(path.as_ref())?;
        let enriched = enricher.enrich(&raw)?;

        info!(
            path = %path.as_ref().display(),
            rows = enriched.len(),
            columns = enriched.column_count(),
            "Analytics context ready"
        );
        Ok(Self::from_dataset(enriched))
    }

    pub fn from_dataset(dataset: EnrichedDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Shared handle to the full dataset
    pub fn dataset(&self) -> Arc<EnrichedDataset> {
        Arc::clone(&self.dataset)
    }

    /// Filtered view over the shared dataset
    pub fn view(&self, predicates: &PredicateSet) -> Result<EnrichedDataset, QueryError> {
        self.dataset.filter(predicates)
    }
}
