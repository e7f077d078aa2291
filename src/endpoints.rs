//! The API endpoint URIs.

/// The route for registering a new user.
pub(crate) const REGISTER: &str = "/api/users/register";
/// The route for logging in a user.
pub(crate) const LOG_IN: &str = "/api/users/login";
/// The route for revoking the presented bearer token.
pub(crate) const LOG_OUT: &str = "/api/users/logout";

/// The route to create or list categories.
pub(crate) const CATEGORIES: &str = "/api/categories";
/// The route to access a single category.
pub(crate) const CATEGORY: &str = "/api/categories/{category_id}";

/// The route to create or list transactions.
pub(crate) const TRANSACTIONS: &str = "/api/transactions";
/// The route to list transactions narrowed by query parameters.
pub(crate) const FILTERED_TRANSACTIONS: &str = "/api/transactions/filtered";
/// The route to access a single transaction.
pub(crate) const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// The route for the dashboard summary.
pub(crate) const DASHBOARD_SUMMARY: &str = "/api/dashboard/summary";
/// The route for the time-series chart.
pub(crate) const DASHBOARD_CHART: &str = "/api/dashboard/chart";
/// The route for per-category totals of one type.
pub(crate) const CATEGORY_BREAKDOWN: &str = "/api/dashboard/category-breakdown";
/// The route for the named category distribution with percentages.
pub(crate) const CATEGORY_DISTRIBUTION: &str = "/api/dashboard/category-distribution";
/// The route for per-bucket category totals.
pub(crate) const CATEGORY_TRENDS: &str = "/api/dashboard/category-trends";
/// The route for comparing category totals between two date ranges.
pub(crate) const CATEGORY_PERIOD_COMPARISON: &str = "/api/dashboard/category-period-comparison";
/// The route for the largest categories of one type.
pub(crate) const TOP_CATEGORIES: &str = "/api/dashboard/top-categories";
/// The route for the most recent transactions, paged.
pub(crate) const RECENT_TRANSACTIONS: &str = "/api/dashboard/recent-transactions";
/// The route for summary statistics over a date range.
pub(crate) const TRANSACTION_STATS: &str = "/api/dashboard/transaction-stats";
/// The route for per-month balances within a year.
pub(crate) const MONTHLY_BALANCE: &str = "/api/dashboard/monthly-balance";
/// The route for year-over-year totals.
pub(crate) const YEARLY_COMPARISON: &str = "/api/dashboard/yearly-comparison";
/// The route for downloading transactions as CSV.
pub(crate) const EXPORT: &str = "/api/dashboard/export";
