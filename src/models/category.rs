//! This file defines the `Category` type and the types needed to create one.
//! A category labels transactions of one type; a transaction always refers
//! to exactly one category.

use std::fmt::Display;

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, TransactionType, UserID},
};

/// The name of a category.
///
/// Between 2 and 50 characters after trimming surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidCategoryName] if `name`
    /// is shorter than 2 or longer than 50 characters once trimmed.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();
        let length = name.chars().count();

        if (2..=50).contains(&length) {
            Ok(Self(name.to_owned()))
        } else {
            Err(Error::InvalidCategoryName(
                "the name must be between 2 and 50 characters".to_owned(),
            ))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure the length invariant holds, e.g. values read
    /// back from the database.
    pub(crate) fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A label for transactions of one type, e.g. 'Groceries', 'Wages'.
///
/// A user cannot own two categories with the same name and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: DatabaseID,
    name: CategoryName,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    user_id: UserID,
}

impl Category {
    /// The id of the category.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The name of the category.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Whether the category labels revenue or expenses.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The id of the user that owns the category.
    pub fn user_id(&self) -> UserID {
        self.user_id
    }

    /// Insert a new category into the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateCategory] if the user already has a category with
    ///   this name and type,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn insert(
        name: CategoryName,
        transaction_type: TransactionType,
        user_id: UserID,
        connection: &Connection,
    ) -> Result<Self, Error> {
        connection.execute(
            "INSERT INTO category (name, kind, user_id) VALUES (?1, ?2, ?3)",
            (name.as_ref(), transaction_type, user_id.as_i64()),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Self {
            id,
            name,
            transaction_type,
            user_id,
        })
    }

    /// Retrieve the category `id` owned by `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the category does not exist or belongs to
    ///   another user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn select(
        id: DatabaseID,
        user_id: UserID,
        connection: &Connection,
    ) -> Result<Self, Error> {
        let category = connection
            .prepare(
                "SELECT id, name, kind, user_id FROM category
                 WHERE id = :id AND user_id = :user_id",
            )?
            .query_row(
                &[(":id", &id), (":user_id", &user_id.as_i64())],
                Self::map_row,
            )?;

        Ok(category)
    }

    /// Retrieve all categories owned by `user_id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    pub fn select_by_user(user_id: UserID, connection: &Connection) -> Result<Vec<Self>, Error> {
        connection
            .prepare(
                "SELECT id, name, kind, user_id FROM category
                 WHERE user_id = :user_id ORDER BY id ASC",
            )?
            .query_map(&[(":user_id", &user_id.as_i64())], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(Error::SqlError))
            .collect()
    }

    /// Replace the name and type of the category `id` owned by `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the category does not exist or belongs to
    ///   another user,
    /// - [Error::DuplicateCategory] if the new name and type collide with
    ///   another of the user's categories,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn update(
        id: DatabaseID,
        user_id: UserID,
        name: CategoryName,
        transaction_type: TransactionType,
        connection: &Connection,
    ) -> Result<Self, Error> {
        // Select first so a missing row is reported as not-found rather
        // than surfacing as a constraint error from the update.
        Self::select(id, user_id, connection)?;

        connection.execute(
            "UPDATE category SET name = ?1, kind = ?2 WHERE id = ?3 AND user_id = ?4",
            (name.as_ref(), transaction_type, id, user_id.as_i64()),
        )?;

        Ok(Self {
            id,
            name,
            transaction_type,
            user_id,
        })
    }

    /// Delete the category `id` owned by `user_id`.
    ///
    /// Transactions referring to the category are left untouched; their
    /// category reference simply stops resolving.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the category does not exist or belongs to
    ///   another user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn delete(id: DatabaseID, user_id: UserID, connection: &Connection) -> Result<(), Error> {
        let rows_deleted = connection.execute(
            "DELETE FROM category WHERE id = ?1 AND user_id = ?2",
            (id, user_id.as_i64()),
        )?;

        if rows_deleted == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

impl CreateTable for Category {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    kind TEXT NOT NULL,
                    user_id INTEGER NOT NULL,
                    UNIQUE(name, user_id, kind),
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Category {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        let transaction_type = row.get(offset + 2)?;
        let user_id = UserID::new(row.get(offset + 3)?);

        Ok(Self {
            id,
            name,
            transaction_type,
            user_id,
        })
    }
}

#[cfg(test)]
mod category_name_tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn new_fails_on_too_short_names() {
        for name in ["", "a", "  a  "] {
            assert!(matches!(
                CategoryName::new(name),
                Err(Error::InvalidCategoryName(_))
            ));
        }
    }

    #[test]
    fn new_fails_on_too_long_names() {
        let name = "a".repeat(51);

        assert!(matches!(
            CategoryName::new(&name),
            Err(Error::InvalidCategoryName(_))
        ));
    }

    #[test]
    fn new_trims_whitespace() {
        let name = CategoryName::new("  Groceries  ").unwrap();

        assert_eq!(name.as_ref(), "Groceries");
    }
}
