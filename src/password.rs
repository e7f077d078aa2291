//! Password hashing and verification for user accounts.

use std::fmt::Display;

use bcrypt::{DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A bcrypt hash of a user's password.
///
/// The raw password is dropped as soon as the hash is created and is never
/// stored or logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `raw_password` with bcrypt.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingCredentials] if `raw_password` is empty,
    /// - [Error::HashingError] if the hashing library fails.
    pub fn new(raw_password: &str) -> Result<Self, Error> {
        if raw_password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        hash(raw_password, DEFAULT_COST)
            .map(Self)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// Wrap an existing hash string without hashing.
    ///
    /// The caller should ensure the string is a valid bcrypt hash, e.g. a
    /// value read back from the database.
    pub fn new_unchecked(hash: String) -> Self {
        Self(hash)
    }

    /// Check whether `raw_password` matches this hash.
    ///
    /// # Errors
    /// This function will return an [Error::HashingError] if the hashing
    /// library fails, e.g. because the stored hash is malformed.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        verify(raw_password, &self.0).map_err(|error| Error::HashingError(error.to_string()))
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod password_hash_tests {
    use crate::Error;

    use super::PasswordHash;

    #[test]
    fn new_rejects_empty_password() {
        assert_eq!(PasswordHash::new(""), Err(Error::MissingCredentials));
    }

    #[test]
    fn hash_does_not_contain_raw_password() {
        let hash = PasswordHash::new("correcthorsebatterystaple").unwrap();

        assert!(!hash.to_string().contains("correcthorsebatterystaple"));
    }

    #[test]
    fn verify_accepts_matching_password() {
        let hash = PasswordHash::new("correcthorsebatterystaple").unwrap();

        assert!(hash.verify("correcthorsebatterystaple").unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = PasswordHash::new("correcthorsebatterystaple").unwrap();

        assert!(!hash.verify("hunter2").unwrap());
    }
}
