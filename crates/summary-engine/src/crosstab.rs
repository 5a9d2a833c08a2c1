//! Cross-Tabulation

use feature_engine::{EnrichedDataset, Field, Level, QueryError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// How contingency counts are scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalize {
    /// Raw counts
    None,
    /// Each row sums to 1
    Row,
    /// Each column sums to 1
    Column,
    /// The whole table sums to 1
    Total,
}

/// Contingency table of two groupable fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab {
    pub row_field: Field,
    pub column_field: Field,
    pub normalize: Normalize,
    /// Row levels, in level order
    pub rows: Vec<Level>,
    /// Column levels, in level order
    pub columns: Vec<Level>,
    /// `cells[i][j]` for `rows[i]` and `columns[j]`
    pub cells: Vec<Vec<f64>>,
    /// Totals column, one entry per row; absent under row normalization
    pub row_totals: Option<Vec<f64>>,
    /// Totals row, one entry per column; absent under column normalization
    pub column_totals: Option<Vec<f64>>,
    /// Present for raw counts and total normalization only
    pub grand_total: Option<f64>,
}

impl CrossTab {
    /// Cell for a pair of levels
    pub fn get(&self, row: &Level, column: &Level) -> Option<f64> {
        let i = self.rows.iter().position(|l| l == row)?;
        let j = self.columns.iter().position(|l| l == column)?;
        Some(self.cells[i][j])
    }

    /// Sum of each column of the body
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.columns.len())
            .map(|j| self.cells.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Sum of each row of the body
    pub fn row_sums(&self) -> Vec<f64> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn has_margins(&self) -> bool {
        self.row_totals.is_some() || self.column_totals.is_some()
    }

    /// Every value multiplied by 100
    pub fn to_percent(&self) -> CrossTab {
        let scale = |v: &f64| v * 100.0;
        CrossTab {
            cells: self
                .cells
                .iter()
                .map(|row| row.iter().map(scale).collect())
                .collect(),
            row_totals: self
                .row_totals
                .as_ref()
                .map(|totals| totals.iter().map(scale).collect()),
            column_totals: self
                .column_totals
                .as_ref()
                .map(|totals| totals.iter().map(scale).collect()),
            grand_total: self.grand_total.as_ref().map(scale),
            ..self.clone()
        }
    }
}

/// Build the contingency table of `row_field` against `column_field`.
///
/// Every pair of possible levels appears, unobserved pairs as 0. Fields with
/// a fixed domain (catalog products, enumerations) use the whole domain;
/// other discrete fields use their observed levels. With `margins`, a totals
/// row and totals column are appended holding the unconditional counts, or
/// their shares of the grand total when normalized. Row normalization omits
/// the totals column and column normalization the totals row. A row or
/// column with no observations normalizes to zeros.
pub fn crosstab(
    dataset: &EnrichedDataset,
    row_field: Field,
    column_field: Field,
    normalize: Normalize,
    margins: bool,
) -> Result<CrossTab, QueryError> {
    let row_field = row_field.require_groupable()?;
    let column_field = column_field.require_groupable()?;

    let rows = levels(dataset, row_field);
    let columns = levels(dataset, column_field);
    let row_index = index(&rows);
    let column_index = index(&columns);

    let mut counts = vec![vec![0.0; columns.len()]; rows.len()];
    for record in dataset.iter() {
        let (Some(row), Some(column)) = (row_field.level(record), column_field.level(record)) else {
            continue;
        };
        if let (Some(&i), Some(&j)) = (row_index.get(&row), column_index.get(&column)) {
            counts[i][j] += 1.0;
        }
    }

    let row_counts: Vec<f64> = counts.iter().map(|row| row.iter().sum()).collect();
    let column_counts: Vec<f64> = (0..columns.len())
        .map(|j| counts.iter().map(|row| row[j]).sum())
        .collect();
    let grand: f64 = row_counts.iter().sum();

    let cells: Vec<Vec<f64>> = counts
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &count)| match normalize {
                    Normalize::None => count,
                    Normalize::Row => ratio(count, row_counts[i]),
                    Normalize::Column => ratio(count, column_counts[j]),
                    Normalize::Total => ratio(count, grand),
                })
                .collect()
        })
        .collect();

    // Under Row or Column normalization the margin along the normalized axis
    // would be all ones and is left out, as is the grand total.
    let (row_totals, column_totals, grand_total) = if margins {
        let row_totals = match normalize {
            Normalize::None => Some(row_counts.clone()),
            Normalize::Column | Normalize::Total => {
                Some(row_counts.iter().map(|&total| ratio(total, grand)).collect())
            }
            Normalize::Row => None,
        };
        let column_totals = match normalize {
            Normalize::None => Some(column_counts.clone()),
            Normalize::Row | Normalize::Total => {
                Some(column_counts.iter().map(|&total| ratio(total, grand)).collect())
            }
            Normalize::Column => None,
        };
        let grand_total = match normalize {
            Normalize::None => Some(grand),
            Normalize::Total => Some(ratio(grand, grand)),
            Normalize::Row | Normalize::Column => None,
        };
        (row_totals, column_totals, grand_total)
    } else {
        (None, None, None)
    };

    debug!(
        query = "crosstab",
        %row_field,
        %column_field,
        ?normalize,
        margins,
        rows = dataset.len(),
        "Query executed"
    );

    Ok(CrossTab {
        row_field,
        column_field,
        normalize,
        rows,
        columns,
        cells,
        row_totals,
        column_totals,
        grand_total,
    })
}

/// Possible levels of a field: its fixed domain, or the observed levels
fn levels(dataset: &EnrichedDataset, field: Field) -> Vec<Level> {
    field.domain(dataset.catalog()).unwrap_or_else(|| {
        dataset
            .iter()
            .filter_map(|r| field.level(r))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    })
}

fn index(levels: &[Level]) -> BTreeMap<Level, usize> {
    levels
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, level)| (level, i))
        .collect()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
