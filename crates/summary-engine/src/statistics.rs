//! Descriptive Statistics

use feature_engine::{EnrichedDataset, Field, QueryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Tukey fence multiplier for box-plot outliers
pub const FENCE_FACTOR: f64 = 1.5;

/// Aggregate applied to a group of numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    /// Sample standard deviation (n - 1)
    Std,
    Sum,
    Median,
    Min,
    Max,
}

impl Statistic {
    /// Apply to a non-empty group. Empty input yields NaN except for `Sum`.
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Statistic::Mean => mean(values),
            Statistic::Std => sample_std(values),
            Statistic::Sum => values.iter().sum(),
            Statistic::Median => median(values),
            Statistic::Min => values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN),
            Statistic::Max => values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN),
        }
    }
}

/// Arithmetic mean; NaN when empty
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; NaN with fewer than two values
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let m2: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (m2 / (values.len() - 1) as f64).sqrt()
}

pub fn median(values: &[f64]) -> f64 {
    quantile(&sorted(values), 0.5)
}

/// Quantile of sorted values with linear interpolation between order
/// statistics; NaN when empty
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Summary of one numeric column, including the box-plot view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    pub max: f64,
    /// Interquartile range
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Values outside the fences
    pub outliers: usize,
}

impl Describe {
    /// Compute the summary of a slice of values
    pub fn compute(values: &[f64]) -> Self {
        let sorted = sorted(values);
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower_fence = q1 - FENCE_FACTOR * iqr;
        let upper_fence = q3 + FENCE_FACTOR * iqr;
        let outliers = sorted
            .iter()
            .filter(|&&v| v < lower_fence || v > upper_fence)
            .count();

        Self {
            count: sorted.len(),
            mean: mean(&sorted),
            std: sample_std(&sorted),
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q1,
            median: quantile(&sorted, 0.5),
            q3,
            max: sorted.last().copied().unwrap_or(f64::NAN),
            iqr,
            lower_fence,
            upper_fence,
            outliers,
        }
    }
}

/// Values of a numeric field, in dataset order
pub fn column(dataset: &EnrichedDataset, field: Field) -> Result<Vec<f64>, QueryError> {
    let field = field.require_numeric()?;
    Ok(dataset.iter().filter_map(|r| field.value(r)).collect())
}

/// Describe each requested numeric field
pub fn describe(
    dataset: &EnrichedDataset,
    fields: &[Field],
) -> Result<BTreeMap<Field, Describe>, QueryError> {
    for field in fields {
        field.require_numeric()?;
    }

    let mut summaries = BTreeMap::new();
    for &field in fields {
        summaries.insert(field, Describe::compute(&column(dataset, field)?));
    }

    debug!(query = "describe", fields = fields.len(), rows = dataset.len(), "Query executed");
    Ok(summaries)
}
