//! Library error type
//!
//! Pipeline operations never fail (unknown ids are no-ops); these errors
//! cover the ambient edges: config files, seed sources and export writes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("seed request failed: {0}")]
    SeedFetch(#[from] reqwest::Error),

    #[error("duplicate record id `{0}` in seed data")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
