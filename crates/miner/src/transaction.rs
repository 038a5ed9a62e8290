//! Transaction log model and loader.
//!
//! A transaction is one input record: the item identifiers bought together,
//! kept in record order with duplicates intact. Identifiers are opaque
//! labels; they are compared and hashed, never parsed numerically.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{MinerError, Result};

/// Opaque item identifier as it appears in the input.
pub type Item = String;

/// One input record, item identifiers in record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: Vec<Item>,
}

impl Transaction {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Split one whitespace-delimited record into a transaction.
    ///
    /// A blank line yields an empty transaction, which later contributes
    /// zero itemsets rather than an error.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        Self {
            items: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct items in canonical (lexical) order.
    ///
    /// This is the base set for subset enumeration: repeated identifiers in
    /// the raw record collapse here, so no positional duplicate can ever
    /// reach the counter.
    #[must_use]
    pub fn distinct_items(&self) -> Vec<Item> {
        let mut distinct = self.items.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }
}

/// A fully materialized transaction log.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Read a whitespace-delimited log, one transaction per line.
    pub fn from_path(path: &Path) -> Result<Self> {
        let attach = |source| MinerError::ReadInput {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(attach)?;
        let log = Self::from_reader(BufReader::new(file)).map_err(attach)?;
        debug!(
            "loaded {} transactions from '{}'",
            log.len(),
            path.display()
        );
        Ok(log)
    }

    /// Read a whitespace-delimited log from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut transactions = Vec::new();
        for line in reader.lines() {
            transactions.push(Transaction::parse(&line?));
        }
        Ok(Self { transactions })
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
