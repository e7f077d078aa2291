//! Storage for revoked bearer tokens.
//!
//! A logged-out token stays blacklisted for as long as it could still be
//! valid; stale rows are purged opportunistically on every access.

use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use crate::{Error, db::CreateTable};

/// How long a blacklist entry is kept. Matches the lifetime of a token, so
/// an entry can be dropped once the token it blocks has expired.
const BLACKLIST_TTL: Duration = Duration::hours(24);

/// A bearer token that was invalidated by logging out.
pub(crate) struct BlacklistedToken;

impl CreateTable for BlacklistedToken {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS blacklisted_token (
                    token TEXT PRIMARY KEY,
                    created_at TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

/// Add `token` to the blacklist.
///
/// Blacklisting the same token twice is not an error.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub(crate) fn blacklist_token(token: &str, connection: &Connection) -> Result<(), Error> {
    purge_expired(connection)?;

    connection.execute(
        "INSERT OR IGNORE INTO blacklisted_token (token, created_at) VALUES (?1, ?2)",
        (token, OffsetDateTime::now_utc()),
    )?;

    Ok(())
}

/// Check whether `token` has been blacklisted.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub(crate) fn is_token_blacklisted(token: &str, connection: &Connection) -> Result<bool, Error> {
    purge_expired(connection)?;

    connection
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM blacklisted_token WHERE token = :token)",
            &[(":token", &token)],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

fn purge_expired(connection: &Connection) -> Result<(), Error> {
    let cutoff = OffsetDateTime::now_utc() - BLACKLIST_TTL;

    connection.execute(
        "DELETE FROM blacklisted_token WHERE created_at < ?1",
        (cutoff,),
    )?;

    Ok(())
}

#[cfg(test)]
mod blacklist_tests {
    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime};

    use crate::db::initialize;

    use super::{blacklist_token, is_token_blacklisted};

    fn init_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn blacklisted_token_is_found() {
        let conn = init_db();

        blacklist_token("some.jwt.token", &conn).unwrap();

        assert!(is_token_blacklisted("some.jwt.token", &conn).unwrap());
    }

    #[test]
    fn unknown_token_is_not_blacklisted() {
        let conn = init_db();

        assert!(!is_token_blacklisted("some.jwt.token", &conn).unwrap());
    }

    #[test]
    fn blacklisting_twice_is_not_an_error() {
        let conn = init_db();

        blacklist_token("some.jwt.token", &conn).unwrap();
        blacklist_token("some.jwt.token", &conn).unwrap();

        assert!(is_token_blacklisted("some.jwt.token", &conn).unwrap());
    }

    #[test]
    fn stale_entries_are_purged() {
        let conn = init_db();

        let stale = OffsetDateTime::now_utc() - Duration::hours(25);
        conn.execute(
            "INSERT INTO blacklisted_token (token, created_at) VALUES (?1, ?2)",
            ("old.jwt.token", stale),
        )
        .unwrap();

        assert!(!is_token_blacklisted("old.jwt.token", &conn).unwrap());
    }
}
