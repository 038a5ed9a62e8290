//! Co-occurrence counting and threshold filtering.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::combinations::{for_each_k_subset, Itemset};
use crate::transaction::{Transaction, TransactionLog};

/// Accumulates co-occurrence frequencies for itemsets of one fixed size.
///
/// Transactions are folded in one at a time, so the full subset universe
/// is never materialized. Each transaction contributes at most once to any
/// itemset because subsets are enumerated over its distinct items.
#[derive(Debug)]
pub struct SupportCounter {
    set_size: usize,
    counts: HashMap<Itemset, u64>,
    transactions: u64,
    undersized: u64,
}

impl SupportCounter {
    #[must_use]
    pub fn new(set_size: usize) -> Self {
        Self {
            set_size,
            counts: HashMap::new(),
            transactions: 0,
            undersized: 0,
        }
    }

    #[must_use]
    pub fn set_size(&self) -> usize {
        self.set_size
    }

    /// Fold one transaction into the counts.
    pub fn observe(&mut self, transaction: &Transaction) {
        self.transactions += 1;
        let distinct = transaction.distinct_items();
        if distinct.len() < self.set_size {
            self.undersized += 1;
            return;
        }
        let k = self.set_size;
        let counts = &mut self.counts;
        for_each_k_subset(&distinct, k, &mut |combo| {
            let itemset = Itemset::from_sorted_refs(combo);
            *counts.entry(itemset).or_insert(0) += 1;
        });
    }

    /// Fold every transaction in the log into the counts.
    pub fn observe_all(&mut self, log: &TransactionLog) {
        for transaction in log.transactions() {
            self.observe(transaction);
        }
        debug!(
            "counted {} itemsets across {} transactions",
            self.counts.len(),
            self.transactions
        );
    }

    /// Number of distinct itemsets seen so far.
    #[must_use]
    pub fn distinct_itemsets(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn transactions_observed(&self) -> u64 {
        self.transactions
    }

    /// Transactions skipped for having fewer distinct items than the set size.
    #[must_use]
    pub fn undersized_skipped(&self) -> u64 {
        self.undersized
    }

    /// Close the counter and rank the itemsets for reporting.
    #[must_use]
    pub fn finish(self) -> FrequencyTable {
        let entries = self
            .counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect();
        FrequencyTable {
            set_size: self.set_size,
            entries,
        }
    }
}

/// Itemset frequencies ranked by descending frequency, ties broken by
/// ascending itemset order.
#[derive(Debug)]
pub struct FrequencyTable {
    set_size: usize,
    entries: Vec<(Itemset, u64)>,
}

impl FrequencyTable {
    #[must_use]
    pub fn set_size(&self) -> usize {
        self.set_size
    }

    #[must_use]
    pub fn entries(&self) -> &[(Itemset, u64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The leading entries whose frequency is at least `sigma`.
    ///
    /// Entries are sorted by descending frequency, so the qualifying
    /// prefix ends at the first entry below the threshold.
    #[must_use]
    pub fn at_least(&self, sigma: u64) -> &[(Itemset, u64)] {
        let end = self.entries.partition_point(|(_, frequency)| *frequency >= sigma);
        &self.entries[..end]
    }
}
