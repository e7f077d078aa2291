//! Narrowing a user's transaction history before aggregation.

use std::ops::RangeInclusive;

use time::Date;

use crate::models::{DatabaseID, Transaction, TransactionType};

/// A filter over one user's transactions.
///
/// The owner scope is not part of the filter: every storage query is
/// already restricted to a single user, and this type only narrows within
/// that scope. An empty filter matches everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionFilter {
    /// Keep only transactions of this type.
    pub transaction_type: Option<TransactionType>,
    /// Keep only transactions dated within this range (inclusive on both
    /// ends).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Keep only transactions whose title contains this string,
    /// case-insensitively.
    pub search_term: Option<String>,
    /// Keep only transactions filed under this category.
    pub category_id: Option<DatabaseID>,
}

impl TransactionFilter {
    /// Build a filter from raw request parameters.
    ///
    /// A `transaction_type` that is not one of the two valid values is
    /// ignored rather than rejected; endpoints that require a type validate
    /// it themselves before building a filter. The date range only applies
    /// when both bounds are present: a lone bound is ignored, not treated
    /// as a half-open range.
    pub fn from_params(
        transaction_type: Option<&str>,
        start_date: Option<Date>,
        end_date: Option<Date>,
        search_term: Option<String>,
        category_id: Option<DatabaseID>,
    ) -> Self {
        let transaction_type = transaction_type.and_then(|value| value.parse().ok());

        let date_range = match (start_date, end_date) {
            (Some(start), Some(end)) => Some(start..=end),
            _ => None,
        };

        let search_term = search_term.filter(|term| !term.is_empty());

        Self {
            transaction_type,
            date_range,
            search_term,
            category_id,
        }
    }

    /// Whether `transaction` passes every clause of the filter.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(transaction_type) = self.transaction_type
            && transaction.transaction_type() != transaction_type
        {
            return false;
        }

        if let Some(date_range) = &self.date_range
            && !date_range.contains(&transaction.date())
        {
            return false;
        }

        if let Some(search_term) = &self.search_term
            && !transaction
                .title()
                .to_lowercase()
                .contains(&search_term.to_lowercase())
        {
            return false;
        }

        if let Some(category_id) = self.category_id
            && transaction.category_id() != category_id
        {
            return false;
        }

        true
    }

    /// Keep only the transactions that pass the filter, preserving order.
    pub fn apply(&self, mut transactions: Vec<Transaction>) -> Vec<Transaction> {
        transactions.retain(|transaction| self.matches(transaction));
        transactions
    }
}

#[cfg(test)]
mod filter_tests {
    use time::macros::date;

    use crate::{
        models::{Transaction, TransactionType, UserID},
        report::TransactionFilter,
    };

    fn transaction(
        title: &str,
        transaction_type: TransactionType,
        category_id: i64,
        date: time::Date,
    ) -> Transaction {
        Transaction::new_unchecked(
            1,
            title.to_owned(),
            10.0,
            transaction_type,
            category_id,
            date,
            UserID::new(1),
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TransactionFilter::default();

        assert!(filter.matches(&transaction(
            "Rent",
            TransactionType::Expense,
            1,
            date!(2024 - 01 - 15)
        )));
    }

    #[test]
    fn invalid_type_parameter_is_ignored() {
        let filter = TransactionFilter::from_params(Some("invalid"), None, None, None, None);

        assert_eq!(filter, TransactionFilter::default());
    }

    #[test]
    fn valid_type_parameter_restricts_matches() {
        let filter = TransactionFilter::from_params(Some("expense"), None, None, None, None);

        assert!(filter.matches(&transaction(
            "Rent",
            TransactionType::Expense,
            1,
            date!(2024 - 01 - 15)
        )));
        assert!(!filter.matches(&transaction(
            "Wages",
            TransactionType::Revenue,
            1,
            date!(2024 - 01 - 15)
        )));
    }

    #[test]
    fn lone_date_bound_is_ignored() {
        let only_start = TransactionFilter::from_params(
            None,
            Some(date!(2024 - 01 - 01)),
            None,
            None,
            None,
        );
        let only_end =
            TransactionFilter::from_params(None, None, Some(date!(2024 - 12 - 31)), None, None);

        assert_eq!(only_start.date_range, None);
        assert_eq!(only_end.date_range, None);
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let filter = TransactionFilter::from_params(
            None,
            Some(date!(2024 - 01 - 01)),
            Some(date!(2024 - 01 - 31)),
            None,
            None,
        );

        for date in [date!(2024 - 01 - 01), date!(2024 - 01 - 31)] {
            assert!(filter.matches(&transaction("Rent", TransactionType::Expense, 1, date)));
        }

        for date in [date!(2023 - 12 - 31), date!(2024 - 02 - 01)] {
            assert!(!filter.matches(&transaction("Rent", TransactionType::Expense, 1, date)));
        }
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let filter = TransactionFilter::from_params(
            None,
            None,
            None,
            Some("GROCER".to_owned()),
            None,
        );

        assert!(filter.matches(&transaction(
            "Weekly groceries",
            TransactionType::Expense,
            1,
            date!(2024 - 01 - 15)
        )));
        assert!(!filter.matches(&transaction(
            "Rent",
            TransactionType::Expense,
            1,
            date!(2024 - 01 - 15)
        )));
    }

    #[test]
    fn category_clause_restricts_matches() {
        let filter = TransactionFilter::from_params(None, None, None, None, Some(2));

        assert!(filter.matches(&transaction(
            "Rent",
            TransactionType::Expense,
            2,
            date!(2024 - 01 - 15)
        )));
        assert!(!filter.matches(&transaction(
            "Rent",
            TransactionType::Expense,
            3,
            date!(2024 - 01 - 15)
        )));
    }

    #[test]
    fn apply_preserves_order() {
        let transactions = vec![
            transaction("A", TransactionType::Expense, 1, date!(2024 - 01 - 01)),
            transaction("B", TransactionType::Revenue, 1, date!(2024 - 01 - 02)),
            transaction("C", TransactionType::Expense, 1, date!(2024 - 01 - 03)),
        ];

        let filter = TransactionFilter::from_params(Some("expense"), None, None, None, None);
        let filtered = filter.apply(transactions);

        let titles: Vec<&str> = filtered.iter().map(Transaction::title).collect();
        assert_eq!(titles, ["A", "C"]);
    }
}
