//! The reporting engine.
//!
//! Pure functions that aggregate a user's transaction history into the
//! response shapes served by the dashboard endpoints. The engine holds no
//! state of its own: each function takes a slice of transactions that has
//! already been scoped to one owner (and, where the report is type-scoped,
//! filtered to one transaction type) and produces an immutable result
//! value in a single pass.
//!
//! The stages are:
//! 1. [TransactionFilter] narrows the fetched history,
//! 2. [bucket_key] maps dates onto coarser time buckets,
//! 3. the shared grouping core folds transactions into per-key totals,
//! 4. the shape assemblers ([summarize], [build_chart], ...) re-nest the
//!    grouped totals into response trees and attach derived metrics
//!    (net balance, percentages, period deltas).

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

mod bucket;
mod chart;
mod comparison;
mod distribution;
mod export;
mod filter;
mod group;
mod monthly;
mod stats;
mod summary;
mod top;
mod trends;

pub use bucket::{Granularity, bucket_key};
pub use chart::{ChartBucket, TypeBreakdown, build_chart};
pub use comparison::{
    CategoryPeriods, PeriodBounds, PeriodLabel, PeriodTotal, YearSummary, compare_periods,
    compare_years,
};
pub use distribution::{DistributionEntry, build_distribution};
pub use export::render_csv;
pub use filter::TransactionFilter;
pub use monthly::{MonthBalance, monthly_balance};
pub use stats::{PeriodStats, compute_stats};
pub use summary::{DashboardSummary, TypeSummary, summarize};
pub use top::{DEFAULT_TOP_LIMIT, category_totals, top_categories};
pub use trends::{TrendBucket, build_trends};

/// The aggregated amount for one category within a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// The category the transactions were filed under. The category itself
    /// may have been deleted since.
    pub category_id: DatabaseID,
    /// The summed amount, rounded to cents.
    pub total: f64,
}
