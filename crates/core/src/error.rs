//! Error types for sales data loading and forecasting.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading sales data or generating forecasts
#[derive(Error, Debug)]
pub enum Error {
    /// The raw sales table does not exist. Raised before any output is touched.
    #[error("sales data file not found: {0}")]
    MissingInput(PathBuf),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the input header
    #[error("missing required column '{0}' in sales data header")]
    MissingColumn(String),

    /// A field failed to parse; `row` is the 1-based line number including the header
    #[error("invalid value in row {row}, column '{column}': {reason}")]
    InvalidField {
        row: usize,
        column: String,
        reason: String,
    },

    /// Not enough rows for the requested computation
    #[error("insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A derived table's header does not match the expected schema
    #[error("schema mismatch in {path}: expected header '{expected}', found '{found}'")]
    SchemaMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
}
