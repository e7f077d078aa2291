//! This file defines the type `Transaction`, the core type of the
//! finance-tracking part of the application, along with the closed
//! two-variant type classification shared with categories.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, params_from_iter,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, DatabaseID, UserID},
    report::TransactionFilter,
};

/// Whether money was earned or spent.
///
/// This is a closed set: every value read from the outside world must be one
/// of the two variants, and anything else is rejected with
/// [Error::InvalidTransactionType].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. wages.
    Revenue,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase string form used in the API and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Revenue => "revenue",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "revenue" => Ok(TransactionType::Revenue),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// An event where money was either earned or spent.
///
/// To create a new `Transaction`, use [Transaction::build]. Existing
/// transactions are retrieved with the `select_*` functions, which are all
/// scoped to one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: DatabaseID,
    title: String,
    amount: f64,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    category_id: DatabaseID,
    date: Date,
    user_id: UserID,
}

impl Transaction {
    /// Start building a new transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidTitle] if `title` is empty or longer than 100
    ///   characters,
    /// - [Error::NonPositiveAmount] if `amount` is not a positive number.
    pub fn build(
        title: &str,
        amount: f64,
        transaction_type: TransactionType,
        category_id: DatabaseID,
        user_id: UserID,
    ) -> Result<TransactionBuilder, Error> {
        Ok(TransactionBuilder {
            title: validate_title(title)?,
            amount: validate_amount(amount)?,
            transaction_type,
            category_id,
            date: OffsetDateTime::now_utc().date(),
            user_id,
        })
    }

    /// The ID of the transaction.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// A short text describing what the transaction was for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The amount of money earned or spent. Always positive; the direction
    /// is given by [Transaction::transaction_type].
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether this transaction is revenue or an expense.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The category the transaction was filed under.
    ///
    /// The category may have been deleted since; callers must tolerate an
    /// ID that no longer resolves.
    pub fn category_id(&self) -> DatabaseID {
        self.category_id
    }

    /// When the transaction happened.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The ID of the user that owns this transaction.
    pub fn user_id(&self) -> UserID {
        self.user_id
    }

    /// Create a transaction from raw parts, skipping validation.
    ///
    /// The caller should ensure the values were validated before, e.g. rows
    /// read back from the database.
    pub(crate) fn new_unchecked(
        id: DatabaseID,
        title: String,
        amount: f64,
        transaction_type: TransactionType,
        category_id: DatabaseID,
        date: Date,
        user_id: UserID,
    ) -> Self {
        Self {
            id,
            title,
            amount,
            transaction_type,
            category_id,
            date,
            user_id,
        }
    }

    /// Retrieve the transaction `id` owned by `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the transaction does not exist or belongs to
    ///   another user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn select(
        id: DatabaseID,
        user_id: UserID,
        connection: &Connection,
    ) -> Result<Self, Error> {
        let transaction = connection
            .prepare(
                "SELECT id, title, amount, kind, category_id, date, user_id
                 FROM \"transaction\" WHERE id = :id AND user_id = :user_id",
            )?
            .query_row(
                &[(":id", &id), (":user_id", &user_id.as_i64())],
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all of a user's transactions ordered by ascending date.
    ///
    /// The ascending order makes downstream aggregation deterministic.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    pub fn select_by_user(user_id: UserID, connection: &Connection) -> Result<Vec<Self>, Error> {
        connection
            .prepare(
                "SELECT id, title, amount, kind, category_id, date, user_id
                 FROM \"transaction\" WHERE user_id = :user_id ORDER BY date ASC, id ASC",
            )?
            .query_map(&[(":user_id", &user_id.as_i64())], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve a user's transactions matching `filter`, most recent first.
    ///
    /// The owner scope is always applied; the remaining clauses are added
    /// only when the corresponding filter field is set.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    pub fn select_filtered(
        user_id: UserID,
        filter: &TransactionFilter,
        connection: &Connection,
    ) -> Result<Vec<Self>, Error> {
        let mut where_clause_parts = vec!["user_id = ?1".to_owned()];
        let mut query_parameters = vec![Value::Integer(user_id.as_i64())];

        if let Some(transaction_type) = filter.transaction_type {
            query_parameters.push(Value::Text(transaction_type.as_str().to_owned()));
            where_clause_parts.push(format!("kind = ?{}", query_parameters.len()));
        }

        if let Some(date_range) = &filter.date_range {
            query_parameters.push(Value::Text(date_range.start().to_string()));
            query_parameters.push(Value::Text(date_range.end().to_string()));
            where_clause_parts.push(format!(
                "date BETWEEN ?{} AND ?{}",
                query_parameters.len() - 1,
                query_parameters.len(),
            ));
        }

        if let Some(search_term) = &filter.search_term {
            query_parameters.push(Value::Text(search_term.to_lowercase()));
            where_clause_parts.push(format!(
                "instr(lower(title), ?{}) > 0",
                query_parameters.len()
            ));
        }

        if let Some(category_id) = filter.category_id {
            query_parameters.push(Value::Integer(category_id));
            where_clause_parts.push(format!("category_id = ?{}", query_parameters.len()));
        }

        let query_string = format!(
            "SELECT id, title, amount, kind, category_id, date, user_id FROM \"transaction\"
             WHERE {} ORDER BY date DESC, id DESC",
            where_clause_parts.join(" AND ")
        );

        connection
            .prepare(&query_string)?
            .query_map(params_from_iter(query_parameters.iter()), Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve one page of a user's transactions, most recent first.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    pub fn select_page(
        user_id: UserID,
        limit: u64,
        offset: u64,
        connection: &Connection,
    ) -> Result<Vec<Self>, Error> {
        connection
            .prepare(
                "SELECT id, title, amount, kind, category_id, date, user_id
                 FROM \"transaction\" WHERE user_id = :user_id
                 ORDER BY date DESC, id DESC LIMIT :limit OFFSET :offset",
            )?
            .query_map(
                rusqlite::named_params! {
                    ":user_id": user_id.as_i64(),
                    ":limit": limit as i64,
                    ":offset": offset as i64,
                },
                Self::map_row,
            )?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// The total number of transactions the user owns.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    pub fn count_by_user(user_id: UserID, connection: &Connection) -> Result<u64, Error> {
        connection
            .query_row(
                "SELECT COUNT(id) FROM \"transaction\" WHERE user_id = :user_id",
                &[(":user_id", &user_id.as_i64())],
                |row| row.get::<_, i64>(0).map(|count| count as u64),
            )
            .map_err(|error| error.into())
    }

    /// Apply a partial update to the transaction `id` owned by `user_id`.
    ///
    /// Each provided field is re-validated before the row is written.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the transaction does not exist or belongs to
    ///   another user,
    /// - [Error::InvalidTitle] or [Error::NonPositiveAmount] if a changed
    ///   field fails validation,
    /// - [Error::InvalidCategory] if a changed category is not owned by the
    ///   user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn update(
        id: DatabaseID,
        user_id: UserID,
        patch: TransactionPatch,
        connection: &Connection,
    ) -> Result<Self, Error> {
        let existing = Self::select(id, user_id, connection)?;

        let title = match patch.title {
            Some(title) => validate_title(&title)?,
            None => existing.title,
        };
        let amount = match patch.amount {
            Some(amount) => validate_amount(amount)?,
            None => existing.amount,
        };
        let transaction_type = patch.transaction_type.unwrap_or(existing.transaction_type);
        let category_id = match patch.category_id {
            Some(category_id) => {
                check_category_ownership(category_id, user_id, connection)?;
                category_id
            }
            None => existing.category_id,
        };
        let date = patch.date.unwrap_or(existing.date);

        connection.execute(
            "UPDATE \"transaction\"
             SET title = ?1, amount = ?2, kind = ?3, category_id = ?4, date = ?5
             WHERE id = ?6 AND user_id = ?7",
            (
                &title,
                amount,
                transaction_type,
                category_id,
                date,
                id,
                user_id.as_i64(),
            ),
        )?;

        Ok(Self {
            id,
            title,
            amount,
            transaction_type,
            category_id,
            date,
            user_id,
        })
    }

    /// Delete the transaction `id` owned by `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the transaction does not exist or belongs to
    ///   another user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn delete(id: DatabaseID, user_id: UserID, connection: &Connection) -> Result<(), Error> {
        let rows_deleted = connection.execute(
            "DELETE FROM \"transaction\" WHERE id = ?1 AND user_id = ?2",
            (id, user_id.as_i64()),
        )?;

        if rows_deleted == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

impl CreateTable for Transaction {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // No foreign key on category_id: deleting a category must not
        // cascade to its transactions, so the reference may dangle.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    amount REAL NOT NULL,
                    kind TEXT NOT NULL,
                    category_id INTEGER NOT NULL,
                    date TEXT NOT NULL,
                    user_id INTEGER NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Transaction {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(offset)?,
            title: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            transaction_type: row.get(offset + 3)?,
            category_id: row.get(offset + 4)?,
            date: row.get(offset + 5)?,
            user_id: UserID::new(row.get(offset + 6)?),
        })
    }
}

/// Builder for creating a new [Transaction].
///
/// The function for finalizing the builder is [TransactionBuilder::insert].
#[derive(Debug, PartialEq)]
pub struct TransactionBuilder {
    title: String,
    amount: f64,
    transaction_type: TransactionType,
    category_id: DatabaseID,
    date: Date,
    user_id: UserID,
}

impl TransactionBuilder {
    /// Set the date for the transaction. Defaults to the current UTC date
    /// when not called.
    pub fn date(mut self, date: Date) -> Self {
        self.date = date;
        self
    }

    /// Insert the transaction into the application database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidCategory] if the category does not exist or is not
    ///   owned by the transaction's user,
    /// - [Error::SqlError] if there is some other SQL error.
    pub fn insert(self, connection: &Connection) -> Result<Transaction, Error> {
        check_category_ownership(self.category_id, self.user_id, connection)?;

        connection.execute(
            "INSERT INTO \"transaction\" (title, amount, kind, category_id, date, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &self.title,
                self.amount,
                self.transaction_type,
                self.category_id,
                self.date,
                self.user_id.as_i64(),
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Transaction {
            id,
            title: self.title,
            amount: self.amount,
            transaction_type: self.transaction_type,
            category_id: self.category_id,
            date: self.date,
            user_id: self.user_id,
        })
    }
}

/// A partial update to an existing [Transaction]. `None` fields keep their
/// current value.
#[derive(Debug, Default, PartialEq)]
pub struct TransactionPatch {
    /// A new title.
    pub title: Option<String>,
    /// A new amount.
    pub amount: Option<f64>,
    /// A new transaction type.
    pub transaction_type: Option<TransactionType>,
    /// A new category reference.
    pub category_id: Option<DatabaseID>,
    /// A new date.
    pub date: Option<Date>,
}

fn validate_title(title: &str) -> Result<String, Error> {
    let title = title.trim();

    if title.is_empty() {
        return Err(Error::InvalidTitle("the title cannot be empty".to_owned()));
    }

    if title.chars().count() > 100 {
        return Err(Error::InvalidTitle(
            "the title cannot be longer than 100 characters".to_owned(),
        ));
    }

    Ok(title.to_owned())
}

fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(Error::NonPositiveAmount)
    }
}

/// Ensure `category_id` refers to a category owned by `user_id`.
///
/// The same error is returned whether the category is missing or owned by
/// someone else, so the caller cannot probe other users' categories.
fn check_category_ownership(
    category_id: DatabaseID,
    user_id: UserID,
    connection: &Connection,
) -> Result<(), Error> {
    match Category::select(category_id, user_id, connection) {
        Ok(_) => Ok(()),
        Err(Error::NotFound) => Err(Error::InvalidCategory),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod transaction_type_tests {
    use crate::Error;

    use super::TransactionType;

    #[test]
    fn parses_both_variants() {
        assert_eq!("revenue".parse(), Ok(TransactionType::Revenue));
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
    }

    #[test]
    fn rejects_anything_else() {
        for value in ["", "income", "Revenue", "dépense", "invalid"] {
            assert_eq!(
                value.parse::<TransactionType>(),
                Err(Error::InvalidTransactionType(value.to_owned()))
            );
        }
    }

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Revenue).unwrap(),
            "\"revenue\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
    }
}

#[cfg(test)]
mod transaction_tests {
    use std::str::FromStr;

    use email_address::EmailAddress;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        models::{Category, CategoryName, User, UserID},
        password::PasswordHash,
    };

    use super::{Transaction, TransactionPatch, TransactionType};

    fn create_database_and_insert_test_user_and_category() -> (Connection, User, Category) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let user = User::insert(
            "alice".to_owned(),
            EmailAddress::from_str("alice@example.com").unwrap(),
            PasswordHash::new_unchecked("hunter2".to_owned()),
            &conn,
        )
        .unwrap();

        let category = Category::insert(
            CategoryName::new("Groceries").unwrap(),
            TransactionType::Expense,
            user.id(),
            &conn,
        )
        .unwrap();

        (conn, user, category)
    }

    #[test]
    fn build_rejects_empty_title() {
        let result = Transaction::build("  ", 10.0, TransactionType::Expense, 1, UserID::new(1));

        assert!(matches!(result, Err(Error::InvalidTitle(_))));
    }

    #[test]
    fn build_rejects_overlong_title() {
        let title = "a".repeat(101);

        let result =
            Transaction::build(&title, 10.0, TransactionType::Expense, 1, UserID::new(1));

        assert!(matches!(result, Err(Error::InvalidTitle(_))));
    }

    #[test]
    fn build_rejects_non_positive_amount() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result =
                Transaction::build("Rent", amount, TransactionType::Expense, 1, UserID::new(1));

            assert_eq!(result, Err(Error::NonPositiveAmount));
        }
    }

    #[test]
    fn insert_transaction_succeeds() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let transaction = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            user.id(),
        )
        .unwrap()
        .date(date!(2024 - 01 - 15))
        .insert(&conn)
        .unwrap();

        assert!(transaction.id() > 0);
        assert_eq!(transaction.title(), "Weekly shop");
        assert_eq!(transaction.amount(), 42.50);
        assert_eq!(transaction.transaction_type(), TransactionType::Expense);
        assert_eq!(transaction.category_id(), category.id());
        assert_eq!(transaction.date(), date!(2024 - 01 - 15));
        assert_eq!(transaction.user_id(), user.id());
    }

    #[test]
    fn insert_transaction_fails_on_unknown_category() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let result = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id() + 999,
            user.id(),
        )
        .unwrap()
        .insert(&conn);

        assert_eq!(result, Err(Error::InvalidCategory));
    }

    #[test]
    fn insert_transaction_fails_on_someone_elses_category() {
        let (conn, _user, category) = create_database_and_insert_test_user_and_category();

        let other_user = User::insert(
            "bob".to_owned(),
            EmailAddress::from_str("bob@example.com").unwrap(),
            PasswordHash::new_unchecked("hunter3".to_owned()),
            &conn,
        )
        .unwrap();

        let result = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            other_user.id(),
        )
        .unwrap()
        .insert(&conn);

        assert_eq!(result, Err(Error::InvalidCategory));
    }

    #[test]
    fn select_is_scoped_to_owner() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let transaction = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            user.id(),
        )
        .unwrap()
        .insert(&conn)
        .unwrap();

        let other_user = UserID::new(user.id().as_i64() + 999);

        assert_eq!(
            Transaction::select(transaction.id(), user.id(), &conn).unwrap(),
            transaction
        );
        assert_eq!(
            Transaction::select(transaction.id(), other_user, &conn),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn select_by_user_orders_by_ascending_date() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        for (title, date) in [
            ("Second", date!(2024 - 02 - 01)),
            ("First", date!(2024 - 01 - 01)),
            ("Third", date!(2024 - 03 - 01)),
        ] {
            Transaction::build(title, 10.0, TransactionType::Expense, category.id(), user.id())
                .unwrap()
                .date(date)
                .insert(&conn)
                .unwrap();
        }

        let transactions = Transaction::select_by_user(user.id(), &conn).unwrap();

        let titles: Vec<&str> = transactions.iter().map(Transaction::title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn update_patches_only_provided_fields() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let transaction = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            user.id(),
        )
        .unwrap()
        .date(date!(2024 - 01 - 15))
        .insert(&conn)
        .unwrap();

        let updated = Transaction::update(
            transaction.id(),
            user.id(),
            TransactionPatch {
                amount: Some(45.0),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(updated.amount(), 45.0);
        assert_eq!(updated.title(), "Weekly shop");
        assert_eq!(updated.date(), date!(2024 - 01 - 15));

        let reloaded = Transaction::select(transaction.id(), user.id(), &conn).unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn update_revalidates_fields() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let transaction = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            user.id(),
        )
        .unwrap()
        .insert(&conn)
        .unwrap();

        let result = Transaction::update(
            transaction.id(),
            user.id(),
            TransactionPatch {
                amount: Some(-1.0),
                ..Default::default()
            },
            &conn,
        );

        assert_eq!(result, Err(Error::NonPositiveAmount));
    }

    #[test]
    fn update_missing_transaction_fails() {
        let (conn, user, _category) = create_database_and_insert_test_user_and_category();

        let result = Transaction::update(999, user.id(), TransactionPatch::default(), &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_removes_transaction() {
        let (conn, user, category) = create_database_and_insert_test_user_and_category();

        let transaction = Transaction::build(
            "Weekly shop",
            42.50,
            TransactionType::Expense,
            category.id(),
            user.id(),
        )
        .unwrap()
        .insert(&conn)
        .unwrap();

        Transaction::delete(transaction.id(), user.id(), &conn).unwrap();

        assert_eq!(
            Transaction::select(transaction.id(), user.id(), &conn),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn delete_missing_transaction_fails() {
        let (conn, user, _category) = create_database_and_insert_test_user_and_category();

        assert_eq!(
            Transaction::delete(999, user.id(), &conn),
            Err(Error::NotFound)
        );
    }
}
