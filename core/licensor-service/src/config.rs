//! Service configuration.

use std::path::PathBuf;

use licensor_core::AdminSecret;

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "licenses.db";

/// Configuration built once at startup and handed to [`LicenseService`](crate::LicenseService).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Password accepted by the admin login check.
    pub admin_secret: AdminSecret,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Verbose diagnostics.
    pub debug: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            admin_secret: AdminSecret::default(),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            debug: false,
        }
    }
}
