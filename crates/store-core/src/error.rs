//! # Store Error Types
//!
//! Typed error handling for product store operations.
//! Lookups and filters return `Result<T, StoreError>`.

use thiserror::Error;

/// Core error type for store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Price threshold could not be parsed as a number
    #[error("Invalid price parameter: {value}")]
    InvalidPriceParameter { value: String },

    /// No product with the given identifier
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },
}

impl StoreError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::InvalidPriceParameter { .. } => 400,
            StoreError::ProductNotFound { .. } => 404,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            StoreError::InvalidPriceParameter {
                value: "abc".into()
            }
            .status_code(),
            400
        );
        assert_eq!(
            StoreError::ProductNotFound { id: "999".into() }.status_code(),
            404
        );
    }

    #[test]
    fn test_display() {
        let err = StoreError::ProductNotFound { id: "42".into() };
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
