//! Route handlers for the category CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState, Error,
    auth::Claims,
    models::{Category, CategoryName, DatabaseID, TransactionType},
};

/// The payload for creating or replacing a category.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryData {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) transaction_type: String,
}

impl CategoryData {
    fn validate(&self) -> Result<(CategoryName, TransactionType), Error> {
        let name = CategoryName::new(&self.name)?;
        let transaction_type = self.transaction_type.parse()?;

        Ok((name, transaction_type))
    }
}

/// A route handler for creating a new category.
pub(crate) async fn create_category(
    State(state): State<AppState>,
    claims: Claims,
    Json(data): Json<CategoryData>,
) -> Result<impl IntoResponse, Error> {
    let (name, transaction_type) = data.validate()?;

    let connection = state.db_connection().lock().unwrap();
    let category = Category::insert(name, transaction_type, claims.user_id(), &connection)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// A route handler for listing the caller's categories.
pub(crate) async fn get_categories(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state.db_connection().lock().unwrap();
    let categories = Category::select_by_user(claims.user_id(), &connection)?;

    Ok(Json(categories))
}

/// A route handler for getting a category by its database ID.
///
/// Responds with 404 if the category does not exist or belongs to another
/// user.
pub(crate) async fn get_category(
    State(state): State<AppState>,
    claims: Claims,
    Path(category_id): Path<DatabaseID>,
) -> Result<Json<Category>, Error> {
    let connection = state.db_connection().lock().unwrap();
    let category = Category::select(category_id, claims.user_id(), &connection)?;

    Ok(Json(category))
}

/// A route handler for replacing a category's name and type.
pub(crate) async fn update_category(
    State(state): State<AppState>,
    claims: Claims,
    Path(category_id): Path<DatabaseID>,
    Json(data): Json<CategoryData>,
) -> Result<Json<Category>, Error> {
    let (name, transaction_type) = data.validate()?;

    let connection = state.db_connection().lock().unwrap();
    let category = Category::update(
        category_id,
        claims.user_id(),
        name,
        transaction_type,
        &connection,
    )?;

    Ok(Json(category))
}

/// A route handler for deleting a category.
///
/// The category's transactions are left in place with a dangling category
/// reference.
pub(crate) async fn delete_category(
    State(state): State<AppState>,
    claims: Claims,
    Path(category_id): Path<DatabaseID>,
) -> Result<Json<serde_json::Value>, Error> {
    let connection = state.db_connection().lock().unwrap();
    Category::delete(category_id, claims.user_id(), &connection)?;

    Ok(Json(json!({ "message": "category deleted" })))
}
