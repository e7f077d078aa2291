//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use jsonwebtoken::{DecodingKey, EncodingKey};
use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The keys used for signing and verifying bearer tokens.
#[derive(Clone)]
pub(crate) struct JwtKeys {
    pub(crate) encoding_key: EncodingKey,
    pub(crate) decoding_key: DecodingKey,
}

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    db_connection: Arc<Mutex<Connection>>,
    jwt_keys: JwtKeys,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models. `jwt_secret` is the symmetric secret used to sign
    /// and verify bearer tokens.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, jwt_secret: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            jwt_keys: JwtKeys {
                encoding_key: EncodingKey::from_secret(jwt_secret.as_ref()),
                decoding_key: DecodingKey::from_secret(jwt_secret.as_ref()),
            },
        })
    }

    /// The database connection.
    pub(crate) fn db_connection(&self) -> &Mutex<Connection> {
        &self.db_connection
    }

    /// The encoding key for bearer tokens.
    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.jwt_keys.encoding_key
    }

    /// The decoding key for bearer tokens.
    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.jwt_keys.decoding_key
    }
}
