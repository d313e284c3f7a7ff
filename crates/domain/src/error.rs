//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during URL parsing or row lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL parsed but its scheme is not one the editor accepts.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// A row identifier does not refer to any row.
    #[error("unknown row: {0}")]
    UnknownRow(String),

    /// A row position is outside the row list.
    #[error("row index {index} out of range (len {len})")]
    RowIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of rows.
        len: usize,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
