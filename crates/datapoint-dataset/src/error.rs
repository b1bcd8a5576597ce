//! Dataset errors.

use datapoint_types::DatapointError;
use thiserror::Error;

/// Errors that can occur while loading or writing property records.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Header lacks one or more required columns.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DatasetError> for DatapointError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Io(e) => Self::Io(e),
            DatasetError::Json(e) => Self::Json(e),
            DatasetError::UnknownFormat(format) => {
                Self::InvalidInput(format!("unknown output format: {format}"))
            }
            other => Self::Parse(other.to_string()),
        }
    }
}
