//! Error types for the license service.

use licensor_core::LicenseError;
use licensor_store::StoreError;
use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Broad class of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed. Nothing was read or written.
    Input,
    /// The license key is already taken.
    Conflict,
    /// No license has the requested id.
    NotFound,
    /// Storage failed or stored data is corrupt.
    Server,
}

/// Errors returned by [`LicenseService`](crate::LicenseService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A create request did not include an expiry date.
    #[error("expiry_date is required")]
    MissingExpiryDate,

    /// A patch did not include any recognized field.
    #[error("no fields to update")]
    EmptyPatch,

    /// The license key already exists.
    #[error("license key already exists: {0}")]
    DuplicateKey(String),

    /// No license has this id.
    #[error("license not found: {0}")]
    NotFound(i64),

    /// A stored expiry date could not be parsed during verification.
    #[error("license {license_key} has a corrupt expiry date: {source}")]
    CorruptExpiry {
        license_key: String,
        #[source]
        source: LicenseError,
    },

    /// Storage error.
    #[error(transparent)]
    Store(StoreError),
}

impl ServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingExpiryDate | Self::EmptyPatch => ErrorKind::Input,
            Self::DuplicateKey(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::CorruptExpiry { .. } | Self::Store(_) => ErrorKind::Server,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(key) => Self::DuplicateKey(key),
            other => Self::Store(other),
        }
    }
}
