//! Month-by-month balance within one calendar year.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    models::{Transaction, TransactionType},
    report::group::{group_totals, round_money},
};

/// The revenue, expenses, and balance of one month.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthBalance {
    /// The month number, 1 through 12.
    pub month: u8,
    /// Total revenue recorded in the month.
    pub revenue: f64,
    /// Total expenses recorded in the month.
    pub expense: f64,
    /// Revenue minus expenses for the month. The sign is preserved.
    pub balance: f64,
}

/// Build the monthly balances, ascending by month.
///
/// Expects transactions already filtered to one calendar year. Months with
/// no transactions are omitted.
pub fn monthly_balance(transactions: &[Transaction]) -> Vec<MonthBalance> {
    let totals = group_totals(transactions, |transaction| {
        (
            transaction.date().month() as u8,
            transaction.transaction_type(),
        )
    });

    let mut months: BTreeMap<u8, (f64, f64)> = BTreeMap::new();

    for ((month, transaction_type), total) in totals {
        let entry = months.entry(month).or_default();
        match transaction_type {
            TransactionType::Revenue => entry.0 += total,
            TransactionType::Expense => entry.1 += total,
        }
    }

    months
        .into_iter()
        .map(|(month, (revenue, expense))| {
            let revenue = round_money(revenue);
            let expense = round_money(expense);

            MonthBalance {
                month,
                revenue,
                expense,
                balance: round_money(revenue - expense),
            }
        })
        .collect()
}
