//! Derived Features and Enrichment

use crate::catalog::ProductCatalog;
use crate::category::{AgeCategory, FitnessCategory};
use crate::error::{EnrichError, QueryError};
use crate::filter::PredicateSet;
use dataset::{Dataset, Iter, Record};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of derived columns appended to each record
pub const DERIVED_DIMENSION: usize = 3;

/// Fields derived from a record through the fixed catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    #[serde(rename = "Product_price")]
    pub price: u32,
    #[serde(rename = "Fitness_category")]
    pub fitness_category: FitnessCategory,
    #[serde(rename = "Age_category")]
    pub age_category: AgeCategory,
}

/// Record together with its derived fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: Record,
    #[serde(flatten)]
    pub derived: DerivedFields,
}

impl AsRef<Record> for EnrichedRecord {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

/// Applies the catalogs to raw records
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    catalog: Arc<ProductCatalog>,
}

impl Enricher {
    /// Create an enricher over a product catalog
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Derive the catalog fields for a single record
    pub fn derive(&self, record: &Record) -> Result<DerivedFields, EnrichError> {
        Ok(DerivedFields {
            price: self.catalog.price(&record.product_code)?,
            fitness_category: FitnessCategory::from_rating(record.fitness_self_rating)?,
            age_category: AgeCategory::from_age(record.age)?,
        })
    }

    /// Enrich every record of a dataset.
    ///
    /// Accepts raw or already enriched rows; derived values depend only on
    /// the raw fields, so enriching twice yields the same dataset. Aborts on
    /// the first record that cannot be derived.
    pub fn enrich<T: AsRef<Record>>(
        &self,
        dataset: &Dataset<T>,
    ) -> Result<EnrichedDataset, EnrichError> {
        debug!(rows = dataset.len(), "Enrichment started");

        let records = dataset.try_map(|position, row| {
            let record = row.as_ref();
            self.derive(record)
                .map(|derived| EnrichedRecord {
                    record: record.clone(),
                    derived,
                })
                .map_err(|e| {
                    warn!(position, error = %e, "Record failed enrichment");
                    e
                })
        })?;

        info!(rows = records.len(), "Enrichment completed");
        Ok(EnrichedDataset {
            records,
            catalog: Arc::clone(&self.catalog),
        })
    }
}

/// Immutable dataset of enriched records, bound to the catalog that produced it
#[derive(Debug, Clone)]
pub struct EnrichedDataset {
    records: Dataset<EnrichedRecord>,
    catalog: Arc<ProductCatalog>,
}

impl EnrichedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, EnrichedRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &Dataset<EnrichedRecord> {
        &self.records
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Number of columns per row: raw schema plus derived fields
    pub fn column_count(&self) -> usize {
        dataset::COLUMNS.len() + DERIVED_DIMENSION
    }

    /// View of the records matching every predicate, in original order
    pub fn filter(&self, predicates: &PredicateSet) -> Result<EnrichedDataset, QueryError> {
        predicates.validate()?;

        let records = self.records.filter(|record| predicates.matches(record));
        debug!(
            kept = records.len(),
            of = self.records.len(),
            predicates = predicates.len(),
            "Filter executed"
        );

        Ok(EnrichedDataset {
            records,
            catalog: Arc::clone(&self.catalog),
        })
    }
}

impl PartialEq for EnrichedDataset {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog && self.records == other.records
    }
}

impl Serialize for EnrichedDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
