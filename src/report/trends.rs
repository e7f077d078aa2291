//! Category trends: how each category of one transaction type evolves over
//! time buckets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    models::Transaction,
    report::{
        CategoryTotal, Granularity, bucket_key,
        group::{group_totals, round_money, sort_descending_by_total},
    },
};

/// The per-category totals of one time bucket.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// The bucket key, e.g. `2024-01` for monthly granularity.
    pub date: String,
    /// Per-category totals within the bucket, largest first.
    pub categories: Vec<CategoryTotal>,
}

/// Build the category trend series, ordered by ascending bucket key.
///
/// Expects transactions already filtered to one transaction type; the
/// function itself is type-agnostic.
pub fn build_trends(transactions: &[Transaction], granularity: Granularity) -> Vec<TrendBucket> {
    let totals = group_totals(transactions, |transaction| {
        (
            bucket_key(transaction.date(), granularity),
            transaction.category_id(),
        )
    });

    let mut buckets: BTreeMap<String, Vec<CategoryTotal>> = BTreeMap::new();

    for ((bucket, category_id), total) in totals {
        buckets.entry(bucket).or_default().push(CategoryTotal {
            category_id,
            total: round_money(total),
        });
    }

    buckets
        .into_iter()
        .map(|(date, mut categories)| {
            sort_descending_by_total(&mut categories);
            TrendBucket { date, categories }
        })
        .collect()
}

#[cfg(test)]
mod trends_tests {
    use time::macros::date;

    use crate::models::{Transaction, TransactionType, UserID};

    use super::{Granularity, build_trends};

    fn expense(amount: f64, category_id: i64, date: time::Date) -> Transaction {
        Transaction::new_unchecked(
            1,
            "test".to_owned(),
            amount,
            TransactionType::Expense,
            category_id,
            date,
            UserID::new(1),
        )
    }

    #[test]
    fn buckets_are_ordered_ascending() {
        let transactions = vec![
            expense(30.0, 1, date!(2024 - 03 - 10)),
            expense(10.0, 1, date!(2024 - 01 - 10)),
            expense(20.0, 1, date!(2024 - 02 - 10)),
        ];

        let trends = build_trends(&transactions, Granularity::Monthly);

        let dates: Vec<&str> = trends.iter().map(|bucket| bucket.date.as_str()).collect();
        assert_eq!(dates, ["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn categories_are_totalled_within_each_bucket() {
        let transactions = vec![
            expense(10.0, 1, date!(2024 - 01 - 05)),
            expense(15.0, 1, date!(2024 - 01 - 25)),
            expense(100.0, 2, date!(2024 - 01 - 10)),
        ];

        let trends = build_trends(&transactions, Granularity::Monthly);

        assert_eq!(trends.len(), 1);
        let categories = &trends[0].categories;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_id, 2);
        assert_eq!(categories[0].total, 100.0);
        assert_eq!(categories[1].category_id, 1);
        assert_eq!(categories[1].total, 25.0);
    }

    #[test]
    fn weekly_buckets_use_iso_week_keys() {
        let transactions = vec![expense(10.0, 1, date!(2024 - 01 - 04))];

        let trends = build_trends(&transactions, Granularity::Weekly);

        assert_eq!(trends[0].date, "2024-W01");
    }

    #[test]
    fn empty_input_gives_no_buckets() {
        assert!(build_trends(&[], Granularity::Monthly).is_empty());
    }
}
