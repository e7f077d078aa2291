//! The shared grouping/reduction core of the reporting engine.
//!
//! Every report is some arrangement of the same fold: extract a key from
//! each transaction, sum amounts per key, then reshape. The key extractor
//! is the only thing that varies, so the fold lives here once and the
//! shape assemblers parameterize it.

use std::collections::BTreeMap;

use crate::{models::Transaction, report::CategoryTotal};

/// Sum transaction amounts per key.
///
/// The result is a `BTreeMap` so iteration order is the key order, which
/// keeps downstream output deterministic regardless of how the input
/// slice happened to be ordered.
pub(crate) fn group_totals<K, F>(transactions: &[Transaction], mut key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    F: FnMut(&Transaction) -> K,
{
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        *totals.entry(key(transaction)).or_insert(0.0) += transaction.amount();
    }

    totals
}

/// Round a money amount to cents.
///
/// Applied at the assembly edge: intermediate sums stay unrounded so the
/// result does not depend on how the work was split up.
pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sort category totals by descending total; ties break on ascending
/// category ID so equal totals still order deterministically.
pub(crate) fn sort_descending_by_total(categories: &mut [CategoryTotal]) {
    categories.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.category_id.cmp(&b.category_id))
    });
}

/// A running reduction over transaction amounts.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Reduction {
    pub(crate) total: f64,
    pub(crate) count: u64,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

impl Reduction {
    /// Fold one amount into the reduction.
    pub(crate) fn observe(&mut self, amount: f64) {
        self.total += amount;
        self.count += 1;
        self.min = Some(self.min.map_or(amount, |min| min.min(amount)));
        self.max = Some(self.max.map_or(amount, |max| max.max(amount)));
    }

    /// The mean of the observed amounts, or `None` when nothing was
    /// observed.
    pub(crate) fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total / self.count as f64)
        }
    }
}
