//! Shared command line surface for the miner tool.

pub mod config;

pub use config::{Config, ConfigError};
