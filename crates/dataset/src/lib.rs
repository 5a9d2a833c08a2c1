//! Customer Purchase Dataset
//!
//! Provides the statically typed record schema, CSV loading with schema
//! validation, and the immutable `Dataset` container every query reads from.

mod collection;
mod error;
mod loader;
mod record;

pub use collection::{Dataset, Iter};
pub use error::LoadError;
pub use loader::{load_path, load_reader};
pub use record::{Gender, MaritalStatus, Record, COLUMNS};
