//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the source CSV
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: {message}")]
    InvalidField {
        line: usize,
        column: String,
        message: String,
    },

    #[error("input has no header row")]
    EmptyInput,
}

/// Errors that can occur inside the aggregation engine
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A key-extraction or reducer closure failed on some record.
    /// The whole call aborts; no partial results are returned.
    #[error("computation failed: {0}")]
    Computation(String),

    /// Binning called with an impossible domain.
    #[error("invalid bin domain: {0}")]
    InvalidDomain(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors raised by the chart registry
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("unknown chart: {0}")]
    UnknownChart(String),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}
