//! Catalog Revenue

use feature_engine::EnrichedDataset;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Sales of one catalog product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub code: String,
    pub price: u32,
    pub units: usize,
    /// `price × units`
    pub revenue: u64,
    /// Fraction of total revenue
    pub share: f64,
}

/// Revenue of every catalog product, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBreakdown {
    pub products: Vec<ProductRevenue>,
    pub total: u64,
}

impl RevenueBreakdown {
    pub fn get(&self, code: &str) -> Option<&ProductRevenue> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Mean revenue over the products that sold at least one unit
    pub fn average_per_product(&self) -> Option<f64> {
        let sold: Vec<u64> = self
            .products
            .iter()
            .filter(|p| p.units > 0)
            .map(|p| p.revenue)
            .collect();
        if sold.is_empty() {
            None
        } else {
            Some(sold.iter().sum::<u64>() as f64 / sold.len() as f64)
        }
    }
}

/// Exact revenue per catalog product. Products without sales report 0.
pub fn revenue(dataset: &EnrichedDataset) -> RevenueBreakdown {
    let mut units: HashMap<&str, usize> = HashMap::new();
    for record in dataset.iter() {
        *units.entry(record.record.product_code.as_str()).or_insert(0) += 1;
    }

    let mut products: Vec<ProductRevenue> = dataset
        .catalog()
        .entries()
        .iter()
        .map(|entry| {
            let sold = units.get(entry.code.as_str()).copied().unwrap_or(0);
            ProductRevenue {
                code: entry.code.clone(),
                price: entry.price,
                units: sold,
                revenue: u64::from(entry.price) * sold as u64,
                share: 0.0,
            }
        })
        .collect();

    let total: u64 = products.iter().map(|p| p.revenue).sum();
    if total > 0 {
        for product in &mut products {
            product.share = product.revenue as f64 / total as f64;
        }
    }

    debug!(query = "revenue", total, rows = dataset.len(), "Query executed");
    RevenueBreakdown { products, total }
}
