//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    routes::{
        category::{
            create_category, delete_category, get_categories, get_category, update_category,
        },
        dashboard::{
            export_transactions, get_category_breakdown, get_category_distribution,
            get_category_period_comparison, get_category_trends, get_chart,
            get_dashboard_summary, get_monthly_balance, get_recent_transactions,
            get_top_categories, get_transaction_stats, get_yearly_comparison,
        },
        transaction::{
            create_transaction, delete_transaction, get_filtered_transactions, get_transaction,
            get_transactions, update_transaction,
        },
        user::{log_in, log_out, register},
    },
};

/// Return a router with all the app's routes.
///
/// Everything except registration and log in requires a valid bearer token;
/// the protected handlers enforce this by extracting the token claims.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::REGISTER, post(register))
        .route(endpoints::LOG_IN, post(log_in))
        .route(endpoints::LOG_OUT, post(log_out))
        .route(
            endpoints::CATEGORIES,
            post(create_category).get(get_categories),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction).get(get_transactions),
        )
        .route(
            endpoints::FILTERED_TRANSACTIONS,
            get(get_filtered_transactions),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route(endpoints::DASHBOARD_SUMMARY, get(get_dashboard_summary))
        .route(endpoints::DASHBOARD_CHART, get(get_chart))
        .route(endpoints::CATEGORY_BREAKDOWN, get(get_category_breakdown))
        .route(
            endpoints::CATEGORY_DISTRIBUTION,
            get(get_category_distribution),
        )
        .route(endpoints::CATEGORY_TRENDS, get(get_category_trends))
        .route(
            endpoints::CATEGORY_PERIOD_COMPARISON,
            get(get_category_period_comparison),
        )
        .route(endpoints::TOP_CATEGORIES, get(get_top_categories))
        .route(
            endpoints::RECENT_TRANSACTIONS,
            get(get_recent_transactions),
        )
        .route(endpoints::TRANSACTION_STATS, get(get_transaction_stats))
        .route(endpoints::MONTHLY_BALANCE, get(get_monthly_balance))
        .route(endpoints::YEARLY_COMPARISON, get(get_yearly_comparison))
        .route(endpoints::EXPORT, get(export_transactions))
        .with_state(state)
}
