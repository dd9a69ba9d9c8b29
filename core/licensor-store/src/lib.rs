//! SQLite storage for Licensor.
//!
//! All records live in one `licenses` table keyed by an autoincrement `id`
//! with a unique constraint on `license_key`. A single connection is shared
//! behind a mutex, so writes are serialized and the unique constraint decides
//! concurrent inserts of the same key.

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::LicenseStore;
