//! Shared fixtures for summary tests

#![allow(dead_code)]

use dataset::{Dataset, Gender, MaritalStatus, Record};
use feature_engine::{EnrichedDataset, Enricher, ProductCatalog};
use proptest::prelude::*;

/// Record with neutral defaults for every field but the product
pub fn record(product: &str) -> Record {
    Record {
        product_code: product.to_string(),
        age: 28,
        gender: Gender::Male,
        education_years: 16,
        marital_status: MaritalStatus::Partnered,
        usage_per_week: 3,
        fitness_self_rating: 3,
        income: 50_000.0,
        miles_per_week: 100.0,
    }
}

/// Catalog used by the worked examples
pub fn abc_catalog() -> ProductCatalog {
    ProductCatalog::new([("A", 1500), ("B", 1750), ("C", 2500)])
}

pub fn enrich(rows: Vec<Record>) -> EnrichedDataset {
    Enricher::default()
        .enrich(&Dataset::new(rows))
        .expect("fixture rows are valid")
}

pub fn enrich_with(catalog: ProductCatalog, rows: Vec<Record>) -> EnrichedDataset {
    Enricher::new(catalog)
        .enrich(&Dataset::new(rows))
        .expect("fixture rows are valid")
}

/// Arbitrary valid record over the default catalog
pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["KP281", "KP481", "KP781"]),
        15u32..=60,
        prop::bool::ANY,
        12u32..=21,
        prop::bool::ANY,
        2u32..=7,
        1u8..=5,
        29_000u32..105_000,
        21u32..=360,
    )
        .prop_map(
            |(product, age, male, education, single, usage, fitness, income, miles)| Record {
                product_code: product.to_string(),
                age,
                gender: if male { Gender::Male } else { Gender::Female },
                education_years: education,
                marital_status: if single {
                    MaritalStatus::Single
                } else {
                    MaritalStatus::Partnered
                },
                usage_per_week: usage,
                fitness_self_rating: fitness,
                income: f64::from(income),
                miles_per_week: f64::from(miles),
            },
        )
}

pub fn arb_dataset(max_rows: usize) -> impl Strategy<Value = EnrichedDataset> {
    prop::collection::vec(arb_record(), 0..max_rows).prop_map(enrich)
}
