//! License records and verification rules for Licensor.
//!
//! This crate holds everything that does not touch storage or the network:
//! - The [`License`] record and its create/patch inputs
//! - Generation of random license keys
//! - Parsing of stored expiry dates
//! - The verification decision ([`Verdict`])
//! - The admin password check ([`AdminSecret`])
//!
//! # Verification
//!
//! A key is valid when it exists, its active flag is set, and its expiry date
//! is not strictly before the current time. Expiry dates carrying an offset
//! (or a trailing `Z`) are compared as instants; expiry dates without one are
//! compared against the naive local wall clock.

mod auth;
mod error;
mod expiry;
mod key;
mod model;
mod verdict;

pub use auth::{AdminSecret, DEFAULT_ADMIN_PASSWORD};
pub use error::{LicenseError, LicenseResult};
pub use expiry::Expiry;
pub use key::{generate_license_key, is_generated_key, KEY_ALPHABET, KEY_LENGTH};
pub use model::{License, LicenseDraft, LicensePatch, NewLicense};
pub use verdict::{InvalidReason, Verdict};
