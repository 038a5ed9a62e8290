//! Command line configuration for the miner tool.

use clap::Parser;
use std::path::Path;
use thiserror::Error;

/// Configuration rejected before any processing starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config error: item set size must be at least 1")]
    ZeroSetSize,
}

/// Command line arguments for the miner tool.
///
/// The three positional parameters keep the historical invocation shape:
/// every one of them may be omitted and falls back to its default.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path of the whitespace-delimited transaction log
    #[arg(value_name = "FILE", default_value = "retail_25k.dat")]
    pub input: String,

    /// Number of items per enumerated set (k)
    #[arg(value_name = "SIZE", default_value_t = 3)]
    pub set_size: usize,

    /// Minimum co-occurrence frequency a set must reach to be reported
    #[arg(value_name = "SIGMA", default_value_t = 4)]
    pub sigma: u64,

    /// Path of the report file. If <PATH> is `-` then stdout is used.
    #[arg(short = 'o', long, value_name = "PATH", default_value = "output.csv")]
    pub output: String,
}

impl Config {
    pub fn input(&self) -> &Path {
        Path::new(&self.input)
    }

    pub fn set_size(&self) -> usize {
        self.set_size
    }

    pub fn sigma(&self) -> u64 {
        self.sigma
    }

    pub fn output(&self) -> &Path {
        Path::new(&self.output)
    }

    pub fn output_to_stdout(&self) -> bool {
        self.output == "-"
    }

    /// Validate once, before the pipeline runs.
    ///
    /// Sigma is not restricted here: any value below 1 reports every
    /// itemset that occurred at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.set_size == 0 {
            return Err(ConfigError::ZeroSetSize);
        }
        Ok(())
    }
}
