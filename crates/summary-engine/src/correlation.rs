//! Pearson Correlation Matrix

use crate::statistics::{column, mean};
use feature_engine::{EnrichedDataset, Field, QueryError};
use serde::Serialize;
use tracing::debug;

/// Symmetric matrix of pairwise correlations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<Field>,
    /// `values[i][j]` correlates `fields[i]` with `fields[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation of two fields in the matrix
    pub fn get(&self, a: Field, b: Field) -> Option<f64> {
        let i = self.fields.iter().position(|&f| f == a)?;
        let j = self.fields.iter().position(|&f| f == b)?;
        Some(self.values[i][j])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Pearson correlation coefficient; NaN when either side has no variance
/// or fewer than two pairs are given
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let (mean_x, mean_y) = (mean(x), mean(y));

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// Correlate every pair of numeric fields.
///
/// The diagonal is 1 and each coefficient is computed once and mirrored,
/// so the matrix is symmetric.
pub fn correlation_matrix(
    dataset: &EnrichedDataset,
    fields: &[Field],
) -> Result<CorrelationMatrix, QueryError> {
    let columns = fields
        .iter()
        .map(|&field| column(dataset, field))
        .collect::<Result<Vec<_>, _>>()?;

    let k = fields.len();
    let mut values = vec![vec![1.0; k]; k];
    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(query = "correlation", fields = k, rows = dataset.len(), "Query executed");
    Ok(CorrelationMatrix {
        fields: fields.to_vec(),
        values,
    })
}
