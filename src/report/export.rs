//! Rendering a transaction history as a CSV document.

use std::collections::HashMap;

use crate::{
    Error,
    models::{DatabaseID, Transaction},
};

/// Render `transactions` as CSV, one row per transaction in the order
/// given.
///
/// `category_names` resolves category IDs to display names; a transaction
/// whose category no longer exists gets an empty category cell.
///
/// # Errors
/// Returns an [Error::ExportError] if writing the CSV fails.
pub fn render_csv(
    transactions: &[Transaction],
    category_names: &HashMap<DatabaseID, String>,
) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(["date", "title", "type", "category", "amount"])
        .map_err(|error| Error::ExportError(error.to_string()))?;

    for transaction in transactions {
        let category = category_names
            .get(&transaction.category_id())
            .map(String::as_str)
            .unwrap_or_default();

        writer
            .write_record([
                transaction.date().to_string().as_str(),
                transaction.title(),
                transaction.transaction_type().as_str(),
                category,
                format!("{:.2}", transaction.amount()).as_str(),
            ])
            .map_err(|error| Error::ExportError(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::ExportError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::ExportError(error.to_string()))
}

#[cfg(test)]
mod export_tests {
    use std::collections::HashMap;

    use time::macros::date;

    use crate::models::{Transaction, TransactionType, UserID};

    use super::render_csv;

    fn transaction(title: &str, amount: f64, category_id: i64) -> Transaction {
        Transaction::new_unchecked(
            1,
            title.to_owned(),
            amount,
            TransactionType::Expense,
            category_id,
            date!(2024 - 01 - 15),
            UserID::new(1),
        )
    }

    #[test]
    fn renders_a_header_and_one_row_per_transaction() {
        let transactions = vec![
            transaction("Weekly shop", 42.5, 1),
            transaction("Rent", 800.0, 2),
        ];
        let category_names =
            HashMap::from([(1, "Groceries".to_owned()), (2, "Housing".to_owned())]);

        let rendered = render_csv(&transactions, &category_names).unwrap();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,title,type,category,amount");
        assert_eq!(lines[1], "2024-01-15,Weekly shop,expense,Groceries,42.50");
        assert_eq!(lines[2], "2024-01-15,Rent,expense,Housing,800.00");
    }

    #[test]
    fn orphaned_categories_render_as_an_empty_cell() {
        let transactions = vec![transaction("Mystery", 10.0, 99)];

        let rendered = render_csv(&transactions, &HashMap::new()).unwrap();

        assert!(rendered.lines().nth(1).unwrap().contains(",Mystery,expense,,10.00"));
    }

    #[test]
    fn empty_history_renders_just_the_header() {
        let rendered = render_csv(&[], &HashMap::new()).unwrap();

        assert_eq!(rendered.trim_end(), "date,title,type,category,amount");
    }
}
