//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use email_address::EmailAddress;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    password::PasswordHash,
};

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to
/// better compile time errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    /// Create a user ID from a raw database integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value of the ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application. Owns categories and transactions.
///
/// The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: UserID,
    username: String,
    email: EmailAddress,
    #[serde(skip_serializing)]
    password_hash: PasswordHash,
}

impl User {
    /// The user's ID in the database.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The unique name the user registered with.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The email address associated with the user.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The user's password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Insert a new user into the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateUsername] if `username` is already taken,
    /// - [Error::DuplicateEmail] if `email` is already registered,
    /// - [Error::SqlError] if there was an unexpected SQL error.
    pub fn insert(
        username: String,
        email: EmailAddress,
        password_hash: PasswordHash,
        connection: &Connection,
    ) -> Result<Self, Error> {
        connection.execute(
            "INSERT INTO user (username, email, password) VALUES (?1, ?2, ?3)",
            (&username, &email.to_string(), password_hash.to_string()),
        )?;

        let id = UserID::new(connection.last_insert_rowid());

        Ok(User {
            id,
            username,
            email,
            password_hash,
        })
    }

    /// Get the user that has the given `email` address.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if no user has the email address,
    /// - [Error::SqlError] if there was an unexpected SQL error.
    pub fn select_by_email(email: &EmailAddress, connection: &Connection) -> Result<Self, Error> {
        connection
            .prepare("SELECT id, username, email, password FROM user WHERE email = :email")?
            .query_row(&[(":email", &email.to_string())], User::map_row)
            .map_err(|error| error.into())
    }

    /// Get the user with the given `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a user,
    /// - [Error::SqlError] if there was an unexpected SQL error.
    pub fn select_by_id(id: UserID, connection: &Connection) -> Result<Self, Error> {
        connection
            .prepare("SELECT id, username, email, password FROM user WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], User::map_row)
            .map_err(|error| error.into())
    }
}

impl MapRow for User {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_id = row.get(offset)?;
        let username = row.get(offset + 1)?;
        let raw_email: String = row.get(offset + 2)?;
        let raw_password_hash = row.get(offset + 3)?;

        Ok(Self {
            id: UserID::new(raw_id),
            username,
            email: EmailAddress::new_unchecked(raw_email),
            password_hash: PasswordHash::new_unchecked(raw_password_hash),
        })
    }
}

impl CreateTable for User {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                    id INTEGER PRIMARY KEY,
                    username TEXT UNIQUE NOT NULL,
                    email TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}
