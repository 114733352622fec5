//! Common error types for drpprdb

use thiserror::Error;

/// Common result type for drpprdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the catalog library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset or config could not be parsed as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested flavor not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dataset parsed but violates a catalog invariant
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Random pick requested from a store with no flavors
    #[error("Flavor store is empty")]
    EmptyStore,
}
