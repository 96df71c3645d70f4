// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagkitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The requested DAG shape cannot be sampled (too few/many edges, bad
    /// weight ranges, more sink edges than candidate sources).
    #[error("Infeasible DAG parameters: {0}")]
    InfeasibleDag(String),

    /// Malformed edge-list line (1-based line number).
    #[error("Edge list parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DagkitError>;
