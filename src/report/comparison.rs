//! Comparing category totals between two date ranges, and year-over-year
//! totals.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    models::{DatabaseID, Transaction, TransactionType},
    report::group::{group_totals, round_money},
};

/// Which of the two compared ranges a transaction landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodLabel {
    /// The first compared range, `[start1, end1]`.
    Period1,
    /// Everything else within the overall span.
    Period2,
}

/// The two date ranges of a period comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBounds {
    /// Start of the first period.
    pub start1: Date,
    /// End of the first period (inclusive).
    pub end1: Date,
    /// Start of the second period. Kept for the request contract; the
    /// classification below does not use it.
    pub start2: Date,
    /// End of the second period (inclusive). Also bounds the overall span.
    pub end2: Date,
}

impl PeriodBounds {
    /// The overall span a transaction must fall into to be compared at all.
    pub fn overall_range(&self) -> RangeInclusive<Date> {
        self.start1..=self.end2
    }

    /// Assign a date within the overall span to one of the two periods.
    ///
    /// Everything outside `[start1, end1]` counts as period 2, including
    /// dates in a gap before `start2`; together with the overall-range
    /// filter this partitions the span with no double-counting and no
    /// omissions.
    pub fn classify(&self, date: Date) -> PeriodLabel {
        if self.start1 <= date && date <= self.end1 {
            PeriodLabel::Period1
        } else {
            PeriodLabel::Period2
        }
    }
}

/// One period's total within a [CategoryPeriods] pivot row.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotal {
    /// Which period the total covers.
    pub period: PeriodLabel,
    /// The summed amount for the category within the period.
    pub total: f64,
}

/// The per-period totals of one category.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPeriods {
    /// The category the transactions were filed under.
    pub category_id: DatabaseID,
    /// The category's total in each period. Both periods are always
    /// present, period 1 first.
    pub periods: Vec<PeriodTotal>,
}

/// Pivot transactions of one type into per-category period totals.
///
/// Expects transactions already filtered to the overall span
/// ([PeriodBounds::overall_range]); every one of them is counted in exactly
/// one period.
pub fn compare_periods(
    transactions: &[Transaction],
    bounds: &PeriodBounds,
) -> Vec<CategoryPeriods> {
    let totals = group_totals(transactions, |transaction| {
        (
            transaction.category_id(),
            bounds.classify(transaction.date()),
        )
    });

    let mut pivot: BTreeMap<DatabaseID, (f64, f64)> = BTreeMap::new();

    for ((category_id, period), total) in totals {
        let entry = pivot.entry(category_id).or_default();
        match period {
            PeriodLabel::Period1 => entry.0 += total,
            PeriodLabel::Period2 => entry.1 += total,
        }
    }

    pivot
        .into_iter()
        .map(|(category_id, (period1, period2))| CategoryPeriods {
            category_id,
            periods: vec![
                PeriodTotal {
                    period: PeriodLabel::Period1,
                    total: round_money(period1),
                },
                PeriodTotal {
                    period: PeriodLabel::Period2,
                    total: round_money(period2),
                },
            ],
        })
        .collect()
}

/// The revenue and expense totals of one calendar year.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The calendar year.
    pub year: i32,
    /// Total revenue recorded in the year.
    pub revenue: f64,
    /// Total expenses recorded in the year.
    pub expense: f64,
}

/// Total the given year and the one before it, ascending by year.
///
/// Expects transactions already filtered to the two calendar years; both
/// rows are always emitted, zero-filled when a year has no transactions.
pub fn compare_years(transactions: &[Transaction], year: i32) -> Vec<YearSummary> {
    let totals = group_totals(transactions, |transaction| {
        (transaction.date().year(), transaction.transaction_type())
    });

    [year - 1, year]
        .into_iter()
        .map(|year| YearSummary {
            year,
            revenue: round_money(
                totals
                    .get(&(year, TransactionType::Revenue))
                    .copied()
                    .unwrap_or(0.0),
            ),
            expense: round_money(
                totals
                    .get(&(year, TransactionType::Expense))
                    .copied()
                    .unwrap_or(0.0),
            ),
        })
        .collect()
}


#[cfg(test)]
mod yearly_comparison_tests {
    use time::macros::date;

    use crate::models::{Transaction, TransactionType, UserID};

    use super::compare_years;

    fn transaction(amount: f64, transaction_type: TransactionType, date: time::Date) -> Transaction {
        Transaction::new_unchecked(
            1,
            "test".to_owned(),
            amount,
            transaction_type,
            1,
            date,
            UserID::new(1),
        )
    }

    #[test]
    fn totals_are_split_by_year_and_type() {
        let transactions = vec![
            transaction(1000.0, TransactionType::Revenue, date!(2023 - 06 - 15)),
            transaction(400.0, TransactionType::Expense, date!(2023 - 07 - 01)),
            transaction(1500.0, TransactionType::Revenue, date!(2024 - 03 - 10)),
        ];

        let comparison = compare_years(&transactions, 2024);

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison[0].year, 2023);
        assert_eq!(comparison[0].revenue, 1000.0);
        assert_eq!(comparison[0].expense, 400.0);
        assert_eq!(comparison[1].year, 2024);
        assert_eq!(comparison[1].revenue, 1500.0);
        assert_eq!(comparison[1].expense, 0.0);
    }

    #[test]
    fn years_without_transactions_are_zero_filled() {
        let comparison = compare_years(&[], 2024);

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison[0].year, 2023);
        assert_eq!(comparison[0].revenue, 0.0);
        assert_eq!(comparison[1].year, 2024);
        assert_eq!(comparison[1].expense, 0.0);
    }
}
