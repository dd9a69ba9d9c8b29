//! License administration and verification for Licensor.
//!
//! [`LicenseService`] is the single entry point used by the HTTP layer:
//! - Admin password check
//! - Create, list, patch and delete of license records
//! - Read-only verification of a key
//!
//! Every failure is a [`ServiceError`] whose [`ErrorKind`] tells the caller
//! whether it was bad input, a key conflict, a missing record, or a fault in
//! the service itself. Invalid licenses are not errors; they are
//! [`Verdict::Invalid`](licensor_core::Verdict::Invalid) results.

mod config;
mod error;
mod service;

pub use config::{ServiceConfig, DEFAULT_DATABASE_PATH};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use service::{LicenseService, MAX_KEY_ATTEMPTS};
