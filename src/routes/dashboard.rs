//! Route handlers for the reporting endpoints.
//!
//! Each handler validates its parameters, fetches the caller's transactions
//! (oldest first), narrows them with a [TransactionFilter], and hands the
//! result to the reporting engine. Type-scoped endpoints reject an invalid
//! `type` before touching the database.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{
    AppState, Error,
    auth::Claims,
    models::{Category, DatabaseID, Transaction, TransactionType, UserID},
    pagination::Pagination,
    report::{
        self, CategoryTotal, ChartBucket, DashboardSummary, DistributionEntry, Granularity,
        MonthBalance, PeriodBounds, PeriodStats, TransactionFilter, TrendBucket, YearSummary,
    },
    routes::parse_date,
};

fn fetch_transactions(state: &AppState, user_id: UserID) -> Result<Vec<Transaction>, Error> {
    let connection = state.db_connection().lock().unwrap();
    Transaction::select_by_user(user_id, &connection)
}

fn fetch_category_names(
    state: &AppState,
    user_id: UserID,
) -> Result<HashMap<DatabaseID, String>, Error> {
    let connection = state.db_connection().lock().unwrap();
    let categories = Category::select_by_user(user_id, &connection)?;

    Ok(categories
        .into_iter()
        .map(|category| (category.id(), category.name().to_string()))
        .collect())
}

/// Parse the `type` parameter of a type-scoped report.
///
/// Unlike the lenient general filter path, a missing or invalid value here
/// is a validation error.
fn require_type(value: Option<&str>) -> Result<TransactionType, Error> {
    value.unwrap_or_default().parse()
}

fn require_year(value: Option<&str>) -> Result<i32, Error> {
    let value = value.ok_or(Error::MissingParameter("year"))?;

    value
        .parse()
        .map_err(|_| Error::InvalidYear(value.to_owned()))
}

fn year_range(year: i32) -> Result<std::ops::RangeInclusive<Date>, Error> {
    let start = Date::from_calendar_date(year, Month::January, 1)
        .map_err(|_| Error::InvalidYear(year.to_string()))?;
    let end = Date::from_calendar_date(year, Month::December, 31)
        .map_err(|_| Error::InvalidYear(year.to_string()))?;

    Ok(start..=end)
}

/// A route handler for the dashboard summary of the caller's entire
/// history.
pub(crate) async fn get_dashboard_summary(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<DashboardSummary>, Error> {
    let transactions = fetch_transactions(&state, claims.user_id())?;

    Ok(Json(report::summarize(&transactions)))
}

/// The optional bucket-granularity parameter of time-series reports.
#[derive(Debug, Deserialize)]
pub(crate) struct PeriodParams {
    period: Option<String>,
}

/// A route handler for the time-series chart.
pub(crate) async fn get_chart(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<PeriodParams>,
) -> Result<Json<Vec<ChartBucket>>, Error> {
    let granularity = Granularity::from_param(params.period.as_deref());
    let transactions = fetch_transactions(&state, claims.user_id())?;

    Ok(Json(report::build_chart(&transactions, granularity)))
}

/// The parameters of type-scoped reports.
#[derive(Debug, Deserialize)]
pub(crate) struct TypeScopedParams {
    #[serde(rename = "type")]
    transaction_type: Option<String>,
    period: Option<String>,
    limit: Option<usize>,
}

/// A route handler for per-category totals of one type, largest first.
pub(crate) async fn get_category_breakdown(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<TypeScopedParams>,
) -> Result<Json<Vec<CategoryTotal>>, Error> {
    let transaction_type = require_type(params.transaction_type.as_deref())?;

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        transaction_type: Some(transaction_type),
        ..Default::default()
    };

    Ok(Json(report::category_totals(&filter.apply(transactions))))
}

/// A route handler for the named category distribution with
/// percentage-of-total shares.
pub(crate) async fn get_category_distribution(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<TypeScopedParams>,
) -> Result<Json<Vec<DistributionEntry>>, Error> {
    let transaction_type = require_type(params.transaction_type.as_deref())?;

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let category_names = fetch_category_names(&state, claims.user_id())?;
    let filter = TransactionFilter {
        transaction_type: Some(transaction_type),
        ..Default::default()
    };

    Ok(Json(report::build_distribution(
        &filter.apply(transactions),
        &category_names,
    )))
}

/// A route handler for per-bucket category totals of one type.
pub(crate) async fn get_category_trends(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<TypeScopedParams>,
) -> Result<Json<Vec<TrendBucket>>, Error> {
    let transaction_type = require_type(params.transaction_type.as_deref())?;
    let granularity = Granularity::from_param(params.period.as_deref());

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        transaction_type: Some(transaction_type),
        ..Default::default()
    };

    Ok(Json(report::build_trends(
        &filter.apply(transactions),
        granularity,
    )))
}

/// A route handler for the largest categories of one type.
pub(crate) async fn get_top_categories(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<TypeScopedParams>,
) -> Result<Json<Vec<CategoryTotal>>, Error> {
    let transaction_type = require_type(params.transaction_type.as_deref())?;
    let limit = params.limit.unwrap_or(report::DEFAULT_TOP_LIMIT);

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        transaction_type: Some(transaction_type),
        ..Default::default()
    };

    Ok(Json(report::top_categories(
        &filter.apply(transactions),
        limit,
    )))
}

/// The parameters of the period-comparison report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PeriodComparisonParams {
    #[serde(rename = "type")]
    transaction_type: Option<String>,
    start_date_1: Option<String>,
    end_date_1: Option<String>,
    start_date_2: Option<String>,
    end_date_2: Option<String>,
}

fn require_date(value: Option<&str>, name: &'static str) -> Result<Date, Error> {
    parse_date(value.ok_or(Error::MissingParameter(name))?)
}

/// A route handler for comparing per-category totals between two date
/// ranges.
pub(crate) async fn get_category_period_comparison(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<PeriodComparisonParams>,
) -> Result<Json<Vec<report::CategoryPeriods>>, Error> {
    let transaction_type = require_type(params.transaction_type.as_deref())?;

    let bounds = PeriodBounds {
        start1: require_date(params.start_date_1.as_deref(), "startDate1")?,
        end1: require_date(params.end_date_1.as_deref(), "endDate1")?,
        start2: require_date(params.start_date_2.as_deref(), "startDate2")?,
        end2: require_date(params.end_date_2.as_deref(), "endDate2")?,
    };

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        transaction_type: Some(transaction_type),
        date_range: Some(bounds.overall_range()),
        ..Default::default()
    };

    Ok(Json(report::compare_periods(
        &filter.apply(transactions),
        &bounds,
    )))
}

/// One page of recent transactions plus paging bookkeeping.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecentTransactions {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) total: u64,
    pub(crate) page: u64,
    pub(crate) total_pages: u64,
}

/// A route handler for the most recent transactions, paged.
pub(crate) async fn get_recent_transactions(
    State(state): State<AppState>,
    claims: Claims,
    Query(pagination): Query<Pagination>,
) -> Result<Json<RecentTransactions>, Error> {
    let connection = state.db_connection().lock().unwrap();

    let transactions = Transaction::select_page(
        claims.user_id(),
        pagination.limit(),
        pagination.offset(),
        &connection,
    )?;
    let total = Transaction::count_by_user(claims.user_id(), &connection)?;

    Ok(Json(RecentTransactions {
        transactions,
        total,
        page: pagination.page(),
        total_pages: pagination.total_pages(total),
    }))
}

/// The date-range parameters of the statistics and export endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DateRangeParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// A route handler for summary statistics over a date range.
pub(crate) async fn get_transaction_stats(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<PeriodStats>, Error> {
    let start_date = require_date(params.start_date.as_deref(), "startDate")?;
    let end_date = require_date(params.end_date.as_deref(), "endDate")?;

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        date_range: Some(start_date..=end_date),
        ..Default::default()
    };

    Ok(Json(report::compute_stats(&filter.apply(transactions))))
}

/// The `year` parameter of the calendar-year reports.
#[derive(Debug, Deserialize)]
pub(crate) struct YearParams {
    year: Option<String>,
}

/// A route handler for per-month balances within one calendar year.
pub(crate) async fn get_monthly_balance(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<MonthBalance>>, Error> {
    let year = require_year(params.year.as_deref())?;

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        date_range: Some(year_range(year)?),
        ..Default::default()
    };

    Ok(Json(report::monthly_balance(&filter.apply(transactions))))
}

/// A route handler for comparing a year's totals with the year before it.
pub(crate) async fn get_yearly_comparison(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<YearSummary>>, Error> {
    let year = require_year(params.year.as_deref())?;

    let previous_start = *year_range(year - 1)?.start();
    let current_end = *year_range(year)?.end();

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let filter = TransactionFilter {
        date_range: Some(previous_start..=current_end),
        ..Default::default()
    };

    Ok(Json(report::compare_years(
        &filter.apply(transactions),
        year,
    )))
}

/// A route handler for downloading the caller's transactions as CSV.
///
/// The date range applies only when both bounds are given, like the general
/// filter path.
pub(crate) async fn export_transactions(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<DateRangeParams>,
) -> Result<impl IntoResponse, Error> {
    let start_date = params.start_date.as_deref().map(parse_date).transpose()?;
    let end_date = params.end_date.as_deref().map(parse_date).transpose()?;

    let transactions = fetch_transactions(&state, claims.user_id())?;
    let category_names = fetch_category_names(&state, claims.user_id())?;
    let filter = TransactionFilter::from_params(None, start_date, end_date, None, None);

    let csv = report::render_csv(&filter.apply(transactions), &category_names)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transactions.csv\"",
            ),
        ],
        csv,
    ))
}
