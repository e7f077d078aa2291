//! The domain models of the application: users, categories, and the
//! transactions they own.

mod category;
mod transaction;
mod user;

pub use category::{Category, CategoryName};
pub use transaction::{Transaction, TransactionBuilder, TransactionPatch, TransactionType};
pub use user::{User, UserID};

/// Alias for the integer type used for database primary keys.
pub type DatabaseID = i64;
