//! Summary statistics over a date range.

use serde::{Deserialize, Serialize};

use crate::{
    models::{Transaction, TransactionType},
    report::group::{Reduction, round_money},
};

/// Counts, totals, and extrema over one date range.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    /// How many transactions fell in the range.
    pub total_transactions: u64,
    /// The summed revenue amounts.
    pub total_revenue: f64,
    /// The summed expense amounts.
    pub total_expense: f64,
    /// The mean amount over all transactions, or `null` for an empty range.
    pub avg_transaction: Option<f64>,
    /// The largest single amount, or `null` for an empty range.
    pub max_transaction: Option<f64>,
    /// The smallest single amount, or `null` for an empty range.
    pub min_transaction: Option<f64>,
}

/// Compute the statistics for transactions within one date range.
///
/// An empty range yields zero counts and totals with `null` extrema rather
/// than an error.
pub fn compute_stats(transactions: &[Transaction]) -> PeriodStats {
    let mut reduction = Reduction::default();
    let mut total_revenue = 0.0;
    let mut total_expense = 0.0;

    for transaction in transactions {
        reduction.observe(transaction.amount());

        match transaction.transaction_type() {
            TransactionType::Revenue => total_revenue += transaction.amount(),
            TransactionType::Expense => total_expense += transaction.amount(),
        }
    }

    PeriodStats {
        total_transactions: reduction.count,
        total_revenue: round_money(total_revenue),
        total_expense: round_money(total_expense),
        avg_transaction: reduction.average().map(round_money),
        max_transaction: reduction.max.map(round_money),
        min_transaction: reduction.min.map(round_money),
    }
}

#[cfg(test)]
mod stats_tests {
    use time::macros::date;

    use crate::models::{Transaction, TransactionType, UserID};

    use super::compute_stats;

    fn transaction(amount: f64, transaction_type: TransactionType) -> Transaction {
        Transaction::new_unchecked(
            1,
            "test".to_owned(),
            amount,
            transaction_type,
            1,
            date!(2024 - 01 - 15),
            UserID::new(1),
        )
    }

    #[test]
    fn stats_cover_count_totals_and_extrema() {
        let transactions = vec![
            transaction(1000.0, TransactionType::Revenue),
            transaction(250.0, TransactionType::Expense),
            transaction(100.0, TransactionType::Expense),
        ];

        let stats = compute_stats(&transactions);

        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.total_revenue, 1000.0);
        assert_eq!(stats.total_expense, 350.0);
        assert_eq!(stats.avg_transaction, Some(450.0));
        assert_eq!(stats.max_transaction, Some(1000.0));
        assert_eq!(stats.min_transaction, Some(100.0));
    }

    #[test]
    fn empty_range_gives_zeroes_and_nulls() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.total_expense, 0.0);
        assert_eq!(stats.avg_transaction, None);
        assert_eq!(stats.max_transaction, None);
        assert_eq!(stats.min_transaction, None);
    }
}
