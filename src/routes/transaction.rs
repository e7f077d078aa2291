//! Route handlers for the transaction CRUD and filtered-listing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::Date;

use crate::{
    AppState, Error,
    auth::Claims,
    models::{DatabaseID, Transaction, TransactionPatch},
    report::TransactionFilter,
    routes::parse_date,
};

/// The payload for creating a new transaction.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionData {
    pub(crate) title: String,
    pub(crate) amount: f64,
    #[serde(rename = "type")]
    pub(crate) transaction_type: String,
    pub(crate) category_id: DatabaseID,
    /// Defaults to the current date when omitted.
    pub(crate) date: Option<Date>,
}

/// A route handler for recording a new transaction.
pub(crate) async fn create_transaction(
    State(state): State<AppState>,
    claims: Claims,
    Json(data): Json<TransactionData>,
) -> Result<impl IntoResponse, Error> {
    let transaction_type = data.transaction_type.parse()?;

    let mut builder = Transaction::build(
        &data.title,
        data.amount,
        transaction_type,
        data.category_id,
        claims.user_id(),
    )?;

    if let Some(date) = data.date {
        builder = builder.date(date);
    }

    let connection = state.db_connection().lock().unwrap();
    let transaction = builder.insert(&connection)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// A route handler for listing the caller's transactions, most recent
/// first.
pub(crate) async fn get_transactions(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.db_connection().lock().unwrap();
    let transactions = Transaction::select_filtered(
        claims.user_id(),
        &TransactionFilter::default(),
        &connection,
    )?;

    Ok(Json(transactions))
}

/// The query parameters of the filtered transaction listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilterParams {
    #[serde(rename = "type")]
    transaction_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    search_term: Option<String>,
    category_id: Option<DatabaseID>,
}

/// A route handler for listing transactions narrowed by query parameters,
/// most recent first.
///
/// An unrecognized `type` is ignored; a date range applies only when both
/// bounds are present; the search term matches titles case-insensitively.
pub(crate) async fn get_filtered_transactions(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let start_date = params.start_date.as_deref().map(parse_date).transpose()?;
    let end_date = params.end_date.as_deref().map(parse_date).transpose()?;

    let filter = TransactionFilter::from_params(
        params.transaction_type.as_deref(),
        start_date,
        end_date,
        params.search_term,
        params.category_id,
    );

    let connection = state.db_connection().lock().unwrap();
    let transactions = Transaction::select_filtered(claims.user_id(), &filter, &connection)?;

    Ok(Json(transactions))
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 if the transaction does not exist or belongs to
/// another user.
pub(crate) async fn get_transaction(
    State(state): State<AppState>,
    claims: Claims,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.db_connection().lock().unwrap();
    let transaction = Transaction::select(transaction_id, claims.user_id(), &connection)?;

    Ok(Json(transaction))
}

/// The payload for partially updating a transaction. Omitted fields keep
/// their current value.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionUpdateData {
    pub(crate) title: Option<String>,
    pub(crate) amount: Option<f64>,
    #[serde(rename = "type")]
    pub(crate) transaction_type: Option<String>,
    pub(crate) category_id: Option<DatabaseID>,
    pub(crate) date: Option<Date>,
}

/// A route handler for updating a transaction in place.
pub(crate) async fn update_transaction(
    State(state): State<AppState>,
    claims: Claims,
    Path(transaction_id): Path<DatabaseID>,
    Json(data): Json<TransactionUpdateData>,
) -> Result<Json<Transaction>, Error> {
    let transaction_type = data
        .transaction_type
        .as_deref()
        .map(str::parse)
        .transpose()?;

    let patch = TransactionPatch {
        title: data.title,
        amount: data.amount,
        transaction_type,
        category_id: data.category_id,
        date: data.date,
    };

    let connection = state.db_connection().lock().unwrap();
    let transaction =
        Transaction::update(transaction_id, claims.user_id(), patch, &connection)?;

    Ok(Json(transaction))
}

/// A route handler for deleting a transaction.
pub(crate) async fn delete_transaction(
    State(state): State<AppState>,
    claims: Claims,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<Json<serde_json::Value>, Error> {
    let connection = state.db_connection().lock().unwrap();
    Transaction::delete(transaction_id, claims.user_id(), &connection)?;

    Ok(Json(json!({ "message": "transaction deleted" })))
}
