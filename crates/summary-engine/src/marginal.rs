//! Marginal Distributions

use feature_engine::{EnrichedDataset, Field, Level, QueryError};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Count and share of one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frequency {
    pub count: usize,
    pub proportion: f64,
}

/// Observed levels of a field, in level order
pub type Distribution = BTreeMap<Level, Frequency>;

/// Count each observed level of a groupable field.
///
/// Counts sum to the dataset length and proportions to 1. Levels that do
/// not occur are absent; an empty dataset gives an empty distribution.
pub fn marginal(dataset: &EnrichedDataset, field: Field) -> Result<Distribution, QueryError> {
    let counts = level_counts(dataset, field)?;
    let total = dataset.len() as f64;

    let distribution: Distribution = counts
        .into_iter()
        .map(|(level, count)| {
            let frequency = Frequency {
                count,
                proportion: count as f64 / total,
            };
            (level, frequency)
        })
        .collect();

    debug!(
        query = "marginal",
        %field,
        levels = distribution.len(),
        rows = dataset.len(),
        "Query executed"
    );
    Ok(distribution)
}

/// Raw level counts of a groupable field
pub(crate) fn level_counts(
    dataset: &EnrichedDataset,
    field: Field,
) -> Result<BTreeMap<Level, usize>, QueryError> {
    let field = field.require_groupable()?;

    let mut counts = BTreeMap::new();
    for level in dataset.iter().filter_map(|r| field.level(r)) {
        *counts.entry(level).or_insert(0) += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Dataset, Gender, MaritalStatus, Record};
    use feature_engine::{AgeCategory, Enricher};

    fn dataset(ages: &[u32]) -> EnrichedDataset {
        let rows = ages
            .iter()
            .map(|&age| Record {
                product_code: "KP281".to_string(),
                age,
                gender: Gender::Male,
                education_years: 14,
                marital_status: MaritalStatus::Single,
                usage_per_week: 3,
                fitness_self_rating: 3,
                income: 40_000.0,
                miles_per_week: 80.0,
            })
            .collect();
        Enricher::default().enrich(&Dataset::new(rows)).unwrap()
    }

    #[test]
    fn test_ordinal_field_keeps_bin_order() {
        let dataset = dataset(&[50, 18, 30, 40, 19, 29]);
        let distribution = marginal(&dataset, Field::AgeCategory).unwrap();

        let keys: Vec<Level> = distribution.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                Level::from(AgeCategory::Teen),
                Level::from(AgeCategory::Adult),
                Level::from(AgeCategory::MidAge),
                Level::from(AgeCategory::TowardsOldAge),
            ]
        );
        assert_eq!(distribution[&Level::from(AgeCategory::Teen)].count, 2);
        assert!((distribution[&Level::from(AgeCategory::Adult)].proportion - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_numeric_field() {
        let dataset = dataset(&[25, 25, 31]);
        let distribution = marginal(&dataset, Field::Age).unwrap();
        assert_eq!(distribution[&Level::Integer(25)].count, 2);
        assert_eq!(distribution[&Level::Integer(31)].count, 1);
    }

    #[test]
    fn test_continuous_field_rejected() {
        let dataset = dataset(&[25]);
        assert!(matches!(
            marginal(&dataset, Field::Income),
            Err(QueryError::TypeMismatch { field: "Income", .. })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = dataset(&[]);
        assert!(marginal(&dataset, Field::Gender).unwrap().is_empty());
    }
}
