use std::process;
use std::time::Instant;

use clap::Parser;
use common::Config;
use miner::{report, SupportCounter, TransactionLog};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize simple tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments with clap
    let config = Config::parse();
    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(2);
    }

    let started = Instant::now();

    // Load the transaction log
    info!("Loading transactions from '{}'", config.input().display());
    let log = match TransactionLog::from_path(config.input()) {
        Ok(log) => log,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    info!("Loaded {} transactions", log.len());

    // Count co-occurrence frequencies for every k-item combination
    info!(
        "Counting itemsets of size {} with support threshold {}",
        config.set_size(),
        config.sigma()
    );
    let mut counter = SupportCounter::new(config.set_size());
    counter.observe_all(&log);
    info!(
        "Counted {} distinct itemsets ({} undersized transactions skipped)",
        counter.distinct_itemsets(),
        counter.undersized_skipped()
    );
    let table = counter.finish();

    // Report itemsets at or above the support threshold
    let written = if config.output_to_stdout() {
        report::write_stdout(&table, config.sigma())
    } else {
        info!("Writing report to '{}'", config.output().display());
        report::write_file(config.output(), &table, config.sigma())
    };
    match written {
        Ok(row_count) => info!("Complete: {} rows in {:.2?}", row_count, started.elapsed()),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
