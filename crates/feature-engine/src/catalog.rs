//! Product Price Catalog

use crate::error::EnrichError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One catalog product and its list price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub code: String,
    pub price: u32,
}

/// Fixed product code to price mapping, in tier order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    entries: Vec<ProductEntry>,
}

impl ProductCatalog {
    /// Build a catalog from `(code, price)` pairs.
    ///
    /// Codes are unique; a repeated code keeps its first price.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut catalog = Self {
            entries: Vec::new(),
        };
        for (code, price) in entries {
            let code = code.into();
            if catalog.contains(&code) {
                warn!(%code, price, "Ignoring duplicate catalog entry");
                continue;
            }
            catalog.entries.push(ProductEntry { code, price });
        }
        catalog
    }

    /// Price of a product code
    pub fn price(&self, code: &str) -> Result<u32, EnrichError> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.price)
            .ok_or_else(|| EnrichError::UnknownProductCode(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Entries in tier order
    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProductCatalog {
    /// The treadmill line: entry, mid and premium models
    fn default() -> Self {
        Self::new([("KP281", 1500), ("KP481", 1750), ("KP781", 2500)])
    }
}
