//! The time-series chart: per-bucket totals broken down by type and
//! category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    models::{Transaction, TransactionType},
    report::{
        CategoryTotal, Granularity, bucket_key,
        group::{group_totals, round_money, sort_descending_by_total},
    },
};

/// One time bucket of the chart.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    /// The bucket key, e.g. `2024-01` for monthly granularity.
    pub date: String,
    /// The per-type breakdown for this bucket. Both types are always
    /// present, in revenue-then-expense order.
    pub entries: Vec<TypeBreakdown>,
}

/// The totals of one transaction type within a time bucket.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    /// Which transaction type this entry covers.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The summed amount over the bucket.
    pub total: f64,
    /// Per-category totals within the bucket, largest first.
    pub categories: Vec<CategoryTotal>,
}

/// Build the time-series chart, ordered by ascending bucket key.
///
/// Every bucket carries an entry for both transaction types; a type with no
/// transactions in a bucket shows a zero total and no categories.
pub fn build_chart(transactions: &[Transaction], granularity: Granularity) -> Vec<ChartBucket> {
    let totals = group_totals(transactions, |transaction| {
        (
            bucket_key(transaction.date(), granularity),
            transaction.transaction_type(),
            transaction.category_id(),
        )
    });

    // Regroup the flat totals per bucket. BTreeMap keys are visited in
    // ascending order, which is exactly the output order.
    let mut buckets: BTreeMap<String, BTreeMap<TransactionType, Vec<CategoryTotal>>> =
        BTreeMap::new();

    for ((bucket, transaction_type, category_id), total) in totals {
        buckets
            .entry(bucket)
            .or_default()
            .entry(transaction_type)
            .or_default()
            .push(CategoryTotal {
                category_id,
                total: round_money(total),
            });
    }

    buckets
        .into_iter()
        .map(|(date, mut types)| {
            let entries = [TransactionType::Revenue, TransactionType::Expense]
                .into_iter()
                .map(|transaction_type| {
                    let mut categories = types.remove(&transaction_type).unwrap_or_default();
                    sort_descending_by_total(&mut categories);

                    TypeBreakdown {
                        transaction_type,
                        total: round_money(
                            categories.iter().map(|category| category.total).sum(),
                        ),
                        categories,
                    }
                })
                .collect();

            ChartBucket { date, entries }
        })
        .collect()
}
