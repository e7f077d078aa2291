//! Route handlers for registration, log in, and log out.

use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState, Error,
    auth::{Claims, blacklist_token, encode_jwt},
    models::User,
    password::PasswordHash,
};

/// The payload for creating a new user account.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RegisterData {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

/// A route handler for registering a new user.
///
/// Responds with a bearer token for the new account so the client does not
/// need a separate log-in round trip.
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterData>,
) -> Result<impl IntoResponse, Error> {
    let username = data.username.trim();

    if username.is_empty() || data.email.is_empty() || data.password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let email = EmailAddress::from_str(&data.email)
        .map_err(|_| Error::InvalidEmail(data.email.clone()))?;
    let password_hash = PasswordHash::new(&data.password)?;

    let connection = state.db_connection().lock().unwrap();
    let user = User::insert(username.to_owned(), email, password_hash, &connection)?;

    let token = encode_jwt(user.id(), state.encoding_key())?;

    Ok((StatusCode::CREATED, Json(json!({ "token": token }))))
}

/// The credentials for logging in.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LogInData {
    pub(crate) email: String,
    pub(crate) password: String,
}

/// A route handler for signing in.
///
/// An unknown email and a wrong password produce the same error so the
/// response does not reveal which part was wrong.
pub(crate) async fn log_in(
    State(state): State<AppState>,
    Json(data): Json<LogInData>,
) -> Result<Json<serde_json::Value>, Error> {
    if data.email.is_empty() || data.password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let email = EmailAddress::from_str(&data.email).map_err(|_| Error::WrongCredentials)?;

    let user = {
        let connection = state.db_connection().lock().unwrap();
        User::select_by_email(&email, &connection).map_err(|error| match error {
            Error::NotFound => Error::WrongCredentials,
            error => error,
        })?
    };

    if !user.password_hash().verify(&data.password)? {
        return Err(Error::WrongCredentials);
    }

    let token = encode_jwt(user.id(), state.encoding_key())?;

    Ok(Json(json!({ "token": token })))
}

/// A route handler for logging out.
///
/// The presented token is blacklisted until it would have expired anyway.
pub(crate) async fn log_out(
    State(state): State<AppState>,
    _claims: Claims,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<serde_json::Value>, Error> {
    let connection = state.db_connection().lock().unwrap();
    blacklist_token(bearer.token(), &connection)?;

    Ok(Json(json!({ "message": "logged out" })))
}
