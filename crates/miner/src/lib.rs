//! Frequent Itemset Miner Library
//!
//! Mines fixed-size frequent itemsets out of a transaction log. A run has
//! three stages: load the whitespace-delimited log, count co-occurrence
//! frequencies of every k-item combination, then report the itemsets whose
//! frequency reaches the support threshold sigma.
//!
//! # Example
//! ```rust
//! use miner::{SupportCounter, TransactionLog};
//!
//! let log = TransactionLog::from_reader("1 2 3\n1 2 4\n".as_bytes()).unwrap();
//! let mut counter = SupportCounter::new(2);
//! counter.observe_all(&log);
//! let table = counter.finish();
//! // only {1, 2} appears in both transactions
//! assert_eq!(table.at_least(2).len(), 1);
//! ```

pub mod combinations;
pub mod error;
pub mod report;
pub mod support;
pub mod transaction;

// Re-export core types for convenient access
pub use combinations::{k_subsets, Itemset};
pub use error::{MinerError, Result};
pub use report::{header, render, rows, write_file, write_stdout, ResultRow};
pub use support::{FrequencyTable, SupportCounter};
pub use transaction::{Item, Transaction, TransactionLog};
