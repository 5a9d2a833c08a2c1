//! Feature Engineering Engine
//!
//! Derives catalog features (price, fitness label, age bin) from customer
//! records and provides typed field access and predicate filtering over the
//! enriched dataset.

mod catalog;
mod category;
mod error;
mod features;
mod field;
mod filter;

pub use catalog::{ProductCatalog, ProductEntry};
pub use category::{AgeCategory, FitnessCategory, AGE_BIN_EDGES};
pub use error::{EnrichError, QueryError};
pub use features::{DerivedFields, EnrichedDataset, EnrichedRecord, Enricher, DERIVED_DIMENSION};
pub use field::{Field, FieldKind, Level};
pub use filter::{Predicate, PredicateSet};
