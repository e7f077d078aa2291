//! Ranking categories by their totals.

use crate::{
    models::Transaction,
    report::{
        CategoryTotal,
        group::{group_totals, round_money, sort_descending_by_total},
    },
};

/// How many categories a top-categories report lists when the caller does
/// not say.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Per-category totals, largest first.
///
/// Expects transactions already filtered to one transaction type.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let totals = group_totals(transactions, |transaction| transaction.category_id());

    let mut categories: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category_id, total)| CategoryTotal {
            category_id,
            total: round_money(total),
        })
        .collect();

    sort_descending_by_total(&mut categories);
    categories
}

/// The `limit` largest categories, in strictly descending order of total.
pub fn top_categories(transactions: &[Transaction], limit: usize) -> Vec<CategoryTotal> {
    let mut categories = category_totals(transactions);
    categories.truncate(limit);
    categories
}
