//! How one transaction type's total distributes across its categories.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    models::{DatabaseID, Transaction},
    report::group::{group_totals, round_money},
};

/// One category's share of a type's total.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// The category's display name.
    pub category: String,
    /// The summed amount for the category.
    pub total: f64,
    /// This category's share of the sum over all listed categories, in
    /// percent.
    pub percentage: f64,
}

/// Build the category distribution for one transaction type, largest share
/// first.
///
/// `category_names` resolves category IDs to display names; transactions
/// whose category no longer exists are dropped from the distribution, the
/// same way the upstream join would drop them.
///
/// When the listed categories sum to zero the percentage is defined as `0`
/// for every entry instead of dividing by zero.
pub fn build_distribution(
    transactions: &[Transaction],
    category_names: &HashMap<DatabaseID, String>,
) -> Vec<DistributionEntry> {
    let totals = group_totals(transactions, |transaction| transaction.category_id());

    let named_totals: Vec<(&str, f64)> = totals
        .iter()
        .filter_map(|(category_id, &total)| {
            category_names
                .get(category_id)
                .map(|name| (name.as_str(), total))
        })
        .collect();

    let combined_total: f64 = named_totals.iter().map(|(_, total)| total).sum();

    let mut distribution: Vec<DistributionEntry> = named_totals
        .into_iter()
        .map(|(name, total)| DistributionEntry {
            category: name.to_owned(),
            total: round_money(total),
            percentage: percentage_of(total, combined_total),
        })
        .collect();

    distribution.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    distribution
}

fn percentage_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (value / total) * 100.0
    }
}
