//! Report rendering and output.
//!
//! The report is one header line followed by one line per qualifying
//! itemset, fields joined by commas. Rows carry the set size, the
//! co-occurrence frequency, then the item identifiers in canonical order.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MinerError, Result};
use crate::support::FrequencyTable;
use crate::transaction::Item;

/// Header line for reports over itemsets of `set_size` items.
#[must_use]
pub fn header(set_size: usize) -> String {
    let mut columns = vec![
        "item set size (N)".to_string(),
        "co-occurrence frequency".to_string(),
    ];
    for n in 1..=set_size {
        columns.push(format!("item {n} id"));
    }
    columns.join(",")
}

/// One report line: set size, frequency, then the itemset's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    set_size: usize,
    frequency: u64,
    items: Vec<Item>,
}

impl ResultRow {
    #[must_use]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.set_size, self.frequency)?;
        for item in &self.items {
            write!(f, ",{item}")?;
        }
        Ok(())
    }
}

/// Rows for every itemset whose frequency is at least `sigma`, in table order.
#[must_use]
pub fn rows(table: &FrequencyTable, sigma: u64) -> Vec<ResultRow> {
    table
        .at_least(sigma)
        .iter()
        .map(|(itemset, frequency)| ResultRow {
            set_size: table.set_size(),
            frequency: *frequency,
            items: itemset.items().to_vec(),
        })
        .collect()
}

/// Write the header and qualifying rows to `writer`. Returns the row count.
pub fn render<W: Write>(writer: &mut W, table: &FrequencyTable, sigma: u64) -> io::Result<usize> {
    writeln!(writer, "{}", header(table.set_size()))?;
    let report_rows = rows(table, sigma);
    for row in &report_rows {
        writeln!(writer, "{row}")?;
    }
    Ok(report_rows.len())
}

/// Write the report to `path`, replacing any existing file. Returns the
/// row count.
///
/// The report is staged in a sibling `.tmp` file and renamed into place,
/// so a failed run never leaves a truncated report at `path`.
pub fn write_file(path: &Path, table: &FrequencyTable, sigma: u64) -> Result<usize> {
    let attach = |source| MinerError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    let staged = PathBuf::from(staged);

    let file = File::create(&staged).map_err(attach)?;
    let mut writer = BufWriter::new(file);
    let row_count = render(&mut writer, table, sigma).map_err(attach)?;
    writer.flush().map_err(attach)?;
    fs::rename(&staged, path).map_err(attach)?;
    debug!("wrote {} report rows to '{}'", row_count, path.display());
    Ok(row_count)
}

/// Write the report to standard output. Returns the row count.
pub fn write_stdout(table: &FrequencyTable, sigma: u64) -> Result<usize> {
    let attach = |source| MinerError::WriteOutput {
        path: PathBuf::from("-"),
        source,
    };
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let row_count = render(&mut writer, table, sigma).map_err(attach)?;
    writer.flush().map_err(attach)?;
    Ok(row_count)
}
