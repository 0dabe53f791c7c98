//! Query error types
//!
//! Defines all error conditions that can occur during window resolution
//! and aggregation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// Input string is not a valid `YYYY-MM-DD` calendar date
    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    /// Window start lies after its end (or after the dataset's latest date)
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// No observations exist to anchor a trailing or open-ended window
    #[error("Dataset contains no observations")]
    EmptyDataset,

    /// Store access failed
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        // EmptyDataset belongs to the query taxonomy, not to opaque store
        // failures; everything else passes through unchanged.
        match err {
            StoreError::EmptyDataset => QueryError::EmptyDataset,
            other => QueryError::Store(other),
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
