//! Error types for the conversion tool
//!
//! Structured error handling using thiserror. Failures are split into a
//! small taxonomy (not-found, decode, write), but every variant stays fatal
//! at the process boundary with exit code 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source CSV file does not exist
    #[error("CSV file not found at {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// CSV could not be decoded into a DataFrame
    #[error("Failed to decode CSV: {0}")]
    Decode(polars::error::PolarsError),

    /// Parquet serialization failed
    #[error("Failed to write Parquet: {0}")]
    Write(polars::error::PolarsError),

    /// File I/O error (size probes, directory creation)
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Column did not decode as a temporal type
    #[error("Column '{column}' is not a timestamp column (found {dtype})")]
    NotTemporal { column: String, dtype: String },

    /// Empty dataset error
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Console message for the process boundary: a missing source gets a
    /// dedicated line, everything else is reported uniformly.
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::SourceNotFound { path } => {
                format!("Error: CSV file not found at {}", path.display())
            }
            other => format!("Error during conversion: {}", other),
        }
    }
}
