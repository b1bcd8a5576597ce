//! Error types for datapoint.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for datapoint operations.
pub type Result<T> = std::result::Result<T, DatapointError>;

/// Errors that can occur while retrieving or reducing a data point.
#[derive(Error, Debug)]
pub enum DatapointError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server returned an unexpected status.
    #[error("Server returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason reported by the server.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Credential missing or rejected by the upstream service.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The request succeeded but nothing was left to reduce.
    #[error("No data available for {what}")]
    NoData {
        /// What was requested.
        what: String,
    },

    /// Market code or area not found.
    #[error("Unknown market: {0}")]
    UnknownMarket(String),

    /// Caller supplied an argument the upstream service cannot accept.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date string could not be interpreted.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatapointError {
    /// Creates a [`DatapointError::NoData`] for the given request description.
    #[must_use]
    pub fn no_data(what: impl Into<String>) -> Self {
        Self::NoData { what: what.into() }
    }

    /// Returns true if this error reports an empty result.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start is after end.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start of the range.
        start: NaiveDateTime,
        /// The end of the range.
        end: NaiveDateTime,
    },

    /// Local time does not exist in the target timezone (DST gap).
    #[error("Local time {0} does not exist in the target timezone")]
    NonexistentLocalTime(NaiveDateTime),
}
