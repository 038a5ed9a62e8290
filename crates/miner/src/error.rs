use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the mining pipeline.
#[derive(Error, Debug)]
pub enum MinerError {
    #[error("IO error: failed to read transaction log '{}': {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("IO error: failed to write report '{}': {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, MinerError>;
