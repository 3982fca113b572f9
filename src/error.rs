//! Error types for the cache wrapper
//!
//! Provides unified error handling using thiserror.

use std::num::{ParseFloatError, ParseIntError};
use std::string::FromUtf8Error;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache wrapper.
///
/// A missing key is never an error; lookups return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Connection or command failure reported by Redis
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Stored bytes are not valid UTF-8
    #[error("Invalid UTF-8 value: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Stored bytes are not a decimal integer
    #[error("Invalid integer value: {0}")]
    ParseInt(#[from] ParseIntError),

    /// Stored bytes are not a floating-point number
    #[error("Invalid float value: {0}")]
    ParseFloat(#[from] ParseFloatError),

    /// Command rejected by a non-Redis backend
    #[error("Backend error: {0}")]
    Backend(String),
}

impl CacheError {
    /// Returns true for errors raised while decoding a retrieved value.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CacheError::Utf8(_) | CacheError::ParseInt(_) | CacheError::ParseFloat(_)
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache wrapper.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_classified() {
        let err: CacheError = "abc".parse::<i64>().unwrap_err().into();
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Invalid integer value"));

        let err: CacheError = String::from_utf8(vec![0xff]).unwrap_err().into();
        assert!(err.is_decode());
    }

    #[test]
    fn test_backend_error_is_not_decode() {
        let err = CacheError::Backend("boom".to_string());
        assert!(!err.is_decode());
        assert_eq!(err.to_string(), "Backend error: boom");
    }
}
