//! Centime is a personal-finance tracking API.
//!
//! Users register and authenticate with bearer tokens, record categorized
//! income and expense transactions, and query aggregated views of their
//! history (dashboard summary, time-series charts, category distributions,
//! period comparisons, CSV export).
//!
//! This library provides the REST API as an [axum] router plus the
//! reporting engine that powers the dashboard endpoints.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod auth;
mod db;
mod endpoints;
pub mod models;
mod pagination;
mod password;
pub mod report;
mod routes;
mod routing;
mod state;

pub use db::initialize as initialize_db;
pub use password::PasswordHash;
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction title failed validation. The string describes what was
    /// wrong with it.
    #[error("invalid transaction title: {0}")]
    InvalidTitle(String),

    /// A transaction amount was zero or negative.
    #[error("the amount must be a positive number")]
    NonPositiveAmount,

    /// A string other than "revenue" or "expense" was used where a
    /// transaction type was required.
    #[error("invalid type \"{0}\": must be \"revenue\" or \"expense\"")]
    InvalidTransactionType(String),

    /// A category name failed validation. The string describes what was
    /// wrong with it.
    #[error("invalid category name: {0}")]
    InvalidCategoryName(String),

    /// A string could not be parsed as an email address.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// A registration or log-in request was missing a required field.
    #[error("all fields are required")]
    MissingCredentials,

    /// A date string could not be parsed as a `YYYY-MM-DD` date.
    #[error("could not parse \"{0}\" as a date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A year parameter was missing or not an integer.
    #[error("invalid year \"{0}\"")]
    InvalidYear(String),

    /// A required query parameter was missing.
    #[error("missing required parameter \"{0}\"")]
    MissingParameter(&'static str),

    /// The user already has a category with the same name and type.
    #[error("a category with this name and type already exists")]
    DuplicateCategory,

    /// The username is already taken.
    #[error("the username is already in use")]
    DuplicateUsername,

    /// The email address is already registered.
    #[error("the email is already in use")]
    DuplicateEmail,

    /// The category ID on a transaction does not refer to a category owned
    /// by the caller.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory,

    /// The requested resource was not found, or belongs to another user.
    ///
    /// Resources owned by other users are reported as not found so that
    /// the caller cannot probe for their existence.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The email/password combination did not match a user.
    #[error("wrong credentials")]
    WrongCredentials,

    /// The bearer token was missing, malformed, expired, or revoked.
    #[error("invalid token")]
    InvalidToken,

    /// Signing a new token failed.
    ///
    /// The cause is logged on the server; the client only sees a generic
    /// internal error.
    #[error("token creation error")]
    TokenCreation,

    /// An unexpected error occurred in the password hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Rendering a CSV export failed.
    #[error("could not render the export: {0}")]
    ExportError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("user.username") =>
            {
                Error::DuplicateUsername
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("user.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("category.") =>
            {
                Error::DuplicateCategory
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidTitle(_)
            | Error::NonPositiveAmount
            | Error::InvalidTransactionType(_)
            | Error::InvalidCategoryName(_)
            | Error::InvalidEmail(_)
            | Error::MissingCredentials
            | Error::InvalidDate(_)
            | Error::InvalidYear(_)
            | Error::MissingParameter(_)
            | Error::DuplicateCategory
            | Error::DuplicateUsername
            | Error::DuplicateEmail
            | Error::InvalidCategory => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::WrongCredentials | Error::InvalidToken => StatusCode::UNAUTHORIZED,
            Error::TokenCreation
            | Error::HashingError(_)
            | Error::SqlError(_)
            | Error::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal errors are logged on the server and replaced with a
        // generic message so implementation details never reach the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {}", self);
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let errors = [
            Error::NonPositiveAmount,
            Error::InvalidTransactionType("invalid".to_owned()),
            Error::InvalidYear("202x".to_owned()),
            Error::DuplicateCategory,
        ];

        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            Error::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn auth_errors_map_to_unauthorized() {
        assert_eq!(
            Error::WrongCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn internal_errors_are_not_leaked() {
        let response = Error::HashingError("bcrypt exploded".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
