//! Error handling for the outcome analytics engine.
//!
//! The statistical core is total over well-typed inputs; errors only arise at
//! the boundaries (loading configuration, validating population definitions,
//! rendering result tables).

use std::io;

/// Specialized error type for outcome analyses
#[derive(Debug, thiserror::Error)]
pub enum OutcomeError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values that cannot be used for an analysis
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Population definitions that cannot be reported side by side
    #[error("Invalid population definition: {0}")]
    InvalidPopulation(String),

    /// A rendered table row does not line up with the table header
    #[error("Table shape mismatch: expected {expected} cells, found {actual}")]
    TableShape {
        /// Number of header cells
        expected: usize,
        /// Number of cells in the offending row
        actual: usize,
    },
}

impl OutcomeError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a population definition error
    pub fn population_error(message: impl Into<String>) -> Self {
        Self::InvalidPopulation(message.into())
    }
}

/// Result type for outcome analysis operations
pub type Result<T> = std::result::Result<T, OutcomeError>;
