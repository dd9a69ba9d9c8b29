//! Admin password check.
//!
//! A single configured secret is compared byte-for-byte with the password a
//! caller supplies. Nothing is issued on success.

use std::fmt;

/// Password used when none is configured. Insecure; override it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The process-wide admin secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret(String);

impl AdminSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns true only if `candidate` is exactly the configured secret.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        self.0.as_bytes() == candidate.as_bytes()
    }

    /// Returns true if the secret is still [`DEFAULT_ADMIN_PASSWORD`].
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for AdminSecret {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(..)")
    }
}
