//! The dashboard summary: per-type totals broken down by category, plus the
//! net balance.

use serde::{Deserialize, Serialize};

use crate::{
    models::{Transaction, TransactionType},
    report::{
        CategoryTotal,
        group::{group_totals, round_money, sort_descending_by_total},
    },
};

/// The top-level dashboard view of a user's entire history.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Revenue totals, overall and per category.
    pub revenue: TypeSummary,
    /// Expense totals, overall and per category.
    pub expense: TypeSummary,
    /// Total revenue minus total expenses. The sign is preserved.
    pub net_balance: f64,
    /// Whether the net balance is non-negative.
    pub is_positive: bool,
}

/// The totals for one transaction type.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    /// The summed amount over every category.
    pub total: f64,
    /// Per-category totals, largest first.
    pub categories: Vec<CategoryTotal>,
}

/// Build the dashboard summary for a user's transactions.
///
/// Both type entries are always present: a type with no transactions gets
/// `total = 0` and an empty category list rather than being omitted, so an
/// empty history produces an all-zero summary, not an error.
pub fn summarize(transactions: &[Transaction]) -> DashboardSummary {
    let totals = group_totals(transactions, |transaction| {
        (transaction.transaction_type(), transaction.category_id())
    });

    let mut revenue = TypeSummary::default();
    let mut expense = TypeSummary::default();

    for (&(transaction_type, category_id), &total) in &totals {
        let entry = match transaction_type {
            TransactionType::Revenue => &mut revenue,
            TransactionType::Expense => &mut expense,
        };

        entry.total += total;
        entry.categories.push(CategoryTotal {
            category_id,
            total: round_money(total),
        });
    }

    revenue.total = round_money(revenue.total);
    expense.total = round_money(expense.total);
    sort_descending_by_total(&mut revenue.categories);
    sort_descending_by_total(&mut expense.categories);

    let net_balance = round_money(revenue.total - expense.total);

    DashboardSummary {
        revenue,
        expense,
        net_balance,
        is_positive: net_balance >= 0.0,
    }
}
