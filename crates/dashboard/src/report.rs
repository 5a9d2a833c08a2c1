//! Overview Report
//!
//! Every view the dashboard renders, computed from one enriched dataset.

use feature_engine::{EnrichedDataset, Field, Level, PredicateSet, QueryError};
use serde::Serialize;
use std::collections::BTreeMap;
use summary_engine::{
    correlation_matrix, crosstab, describe, grouped_stat, marginal, revenue, CorrelationMatrix,
    CrossTab, Describe, Distribution, Normalize, RevenueBreakdown, Statistic,
};
use tracing::debug;

/// Mean with sample standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

impl From<&Describe> for MeanStd {
    fn from(summary: &Describe) -> Self {
        Self {
            mean: summary.mean,
            std: summary.std,
        }
    }
}

/// Product shares within each column level, in percent, with margins
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalProbabilities {
    pub product_given_gender: CrossTab,
    pub product_given_age_category: CrossTab,
    pub product_given_fitness_category: CrossTab,
}

/// Size of the filtered explorer view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExplorerView {
    pub showing: usize,
    pub of: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub total_customers: usize,
    pub feature_count: usize,
    pub income: MeanStd,
    pub miles: MeanStd,
    pub product_distribution: Distribution,
    pub revenue: RevenueBreakdown,
    pub average_revenue_per_product: Option<f64>,
    pub gender_distribution: Distribution,
    pub marital_status_distribution: Distribution,
    /// Raw customer counts
    pub product_by_gender: CrossTab,
    pub conditional_probabilities: ConditionalProbabilities,
    pub correlation: CorrelationMatrix,
    pub average_miles_by_product: BTreeMap<Level, f64>,
    pub average_income_by_product: BTreeMap<Level, f64>,
    pub numeric_summaries: BTreeMap<Field, Describe>,
    pub explorer: ExplorerView,
}

impl OverviewReport {
    /// Build every view over `dataset`; `explorer` only narrows the explorer count
    pub fn build(dataset: &EnrichedDataset, explorer: &PredicateSet) -> Result<Self, QueryError> {
        let numeric: Vec<Field> = Field::numeric().collect();
        let numeric_summaries = describe(dataset, &numeric)?;
        let income = numeric_summaries
            .get(&Field::Income)
            .map(MeanStd::from)
            .ok_or_else(|| QueryError::UnknownField(Field::Income.to_string()))?;
        let miles = numeric_summaries
            .get(&Field::Miles)
            .map(MeanStd::from)
            .ok_or_else(|| QueryError::UnknownField(Field::Miles.to_string()))?;

        let revenue = revenue(dataset);
        let conditional_probabilities = ConditionalProbabilities {
            product_given_gender: product_given(dataset, Field::Gender)?,
            product_given_age_category: product_given(dataset, Field::AgeCategory)?,
            product_given_fitness_category: product_given(dataset, Field::FitnessCategory)?,
        };

        let explored = dataset.filter(explorer)?;
        debug!(showing = explored.len(), of = dataset.len(), "Explorer view");

        Ok(Self {
            total_customers: dataset.len(),
            feature_count: dataset.column_count(),
            income,
            miles,
            product_distribution: marginal(dataset, Field::Product)?,
            average_revenue_per_product: revenue.average_per_product(),
            revenue,
            gender_distribution: marginal(dataset, Field::Gender)?,
            marital_status_distribution: marginal(dataset, Field::MaritalStatus)?,
            product_by_gender: crosstab(dataset, Field::Product, Field::Gender, Normalize::None, false)?,
            conditional_probabilities,
            correlation: correlation_matrix(dataset, &numeric)?,
            average_miles_by_product: grouped_stat(dataset, Field::Product, Field::Miles, Statistic::Mean)?,
            average_income_by_product: grouped_stat(dataset, Field::Product, Field::Income, Statistic::Mean)?,
            numeric_summaries,
            explorer: ExplorerView {
                showing: explored.len(),
                of: dataset.len(),
            },
        })
    }
}

fn product_given(dataset: &EnrichedDataset, condition: Field) -> Result<CrossTab, QueryError> {
    Ok(crosstab(dataset, Field::Product, condition, Normalize::Column, true)?.to_percent())
}
