//! Summary Engine
//!
//! Read-only aggregate views over an enriched dataset: marginal
//! distributions, cross-tabulations, grouped statistics, correlation
//! matrices, descriptive summaries and catalog revenue. Every view is a pure
//! function of the dataset and its parameters.

mod correlation;
mod crosstab;
mod grouped;
mod marginal;
mod revenue;
mod statistics;

pub use correlation::{correlation_matrix, pearson, CorrelationMatrix};
pub use crosstab::{crosstab, CrossTab, Normalize};
pub use grouped::grouped_stat;
pub use marginal::{marginal, Distribution, Frequency};
pub use revenue::{revenue, ProductRevenue, RevenueBreakdown};
pub use statistics::{describe, mean, median, quantile, sample_std, Describe, Statistic, FENCE_FACTOR};

pub use feature_engine::QueryError;
