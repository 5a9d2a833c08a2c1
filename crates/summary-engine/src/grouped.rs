//! Grouped Statistics

use crate::statistics::Statistic;
use feature_engine::{EnrichedDataset, Field, Level, QueryError};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate a numeric field within each level of a grouping field.
///
/// Only groups with members appear in the result.
pub fn grouped_stat(
    dataset: &EnrichedDataset,
    group_field: Field,
    value_field: Field,
    statistic: Statistic,
) -> Result<BTreeMap<Level, f64>, QueryError> {
    let group_field = group_field.require_groupable()?;
    let value_field = value_field.require_numeric()?;

    let mut groups: BTreeMap<Level, Vec<f64>> = BTreeMap::new();
    for record in dataset.iter() {
        if let (Some(level), Some(value)) = (group_field.level(record), value_field.value(record)) {
            groups.entry(level).or_default().push(value);
        }
    }

    let result: BTreeMap<Level, f64> = groups
        .into_iter()
        .map(|(level, values)| (level, statistic.apply(&values)))
        .collect();

    debug!(
        query = "grouped_stat",
        %group_field,
        %value_field,
        ?statistic,
        groups = result.len(),
        "Query executed"
    );
    Ok(result)
}
