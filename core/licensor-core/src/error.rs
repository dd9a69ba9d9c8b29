//! Error types for license records.

use thiserror::Error;

/// Errors raised while interpreting license records.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The stored expiry date is not a recognizable ISO-8601 date or date-time.
    #[error("invalid expiry date: {0:?}")]
    InvalidExpiry(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
