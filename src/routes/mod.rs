//! The HTTP request handlers, one module per resource.

pub(crate) mod category;
pub(crate) mod dashboard;
pub(crate) mod transaction;
pub(crate) mod user;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an explicit `YYYY-MM-DD` request parameter.
///
/// # Errors
/// Returns an [Error::InvalidDate] naming the offending value.
pub(crate) fn parse_date(value: &str) -> Result<Date, Error> {
    Date::parse(value, DATE_FORMAT).map_err(|_| Error::InvalidDate(value.to_owned()))
}
