//! Store error types
//!
//! Defines all errors that can occur at the store boundary.

use thiserror::Error;

/// Errors that can occur in the observation store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying SQLite operation failed
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Dataset holds no observations
    #[error("Dataset contains no observations")]
    EmptyDataset,

    /// Stored data failed to decode (e.g. a date cell that is not YYYY-MM-DD)
    #[error("Corrupt data: {0}")]
    Corruption(String),

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::EmptyDataset;
        assert_eq!(err.to_string(), "Dataset contains no observations");

        let err = StoreError::Corruption("bad date '20170823'".to_string());
        assert_eq!(err.to_string(), "Corrupt data: bad date '20170823'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
