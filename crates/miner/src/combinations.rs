//! Itemset representation and fixed-size subset enumeration.

use crate::transaction::{Item, Transaction};

/// An unordered combination of distinct items in canonical form.
///
/// Canonical means sorted lexically with no duplicates, so equality and
/// hashing ignore whatever order the items had in the source record. The
/// derived `Ord` is the tie-break order used when reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    /// Build the canonical form of an arbitrary item collection.
    #[must_use]
    pub fn canonical(mut items: Vec<Item>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Wrap borrowed items that are already sorted and distinct.
    pub(crate) fn from_sorted_refs(items: &[&Item]) -> Self {
        debug_assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
        Self(items.iter().map(|item| (*item).clone()).collect())
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Visit every k-element subset of `items`, which must be sorted and
/// distinct. Subsets are visited in lexicographic order, each one already
/// canonical because the input is. `k == 0` or `k > items.len()` visits
/// nothing.
pub fn for_each_k_subset<'a, F>(items: &'a [Item], k: usize, visit: &mut F)
where
    F: FnMut(&[&'a Item]),
{
    if k == 0 || k > items.len() {
        return;
    }
    let mut current: Vec<&'a Item> = Vec::with_capacity(k);
    descend(items, k, 0, &mut current, visit);
}

fn descend<'a, F>(
    items: &'a [Item],
    k: usize,
    start: usize,
    current: &mut Vec<&'a Item>,
    visit: &mut F,
) where
    F: FnMut(&[&'a Item]),
{
    if current.len() == k {
        visit(current);
        return;
    }
    for i in start..items.len() {
        current.push(&items[i]);
        descend(items, k, i + 1, current, visit);
        current.pop();
    }
}

/// All distinct k-element subsets of the transaction's distinct items.
///
/// Pure: the same transaction and `k` always produce the same subsets in
/// the same order. A transaction with fewer than `k` distinct items yields
/// an empty vector.
#[must_use]
pub fn k_subsets(transaction: &Transaction, k: usize) -> Vec<Itemset> {
    let distinct = transaction.distinct_items();
    let mut subsets = Vec::new();
    for_each_k_subset(&distinct, k, &mut |combo| {
        subsets.push(Itemset::from_sorted_refs(combo));
    });
    subsets
}
