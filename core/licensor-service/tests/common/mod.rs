//! Shared test helpers for service tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local};
use licensor_core::{AdminSecret, NewLicense};
use licensor_service::LicenseService;
use licensor_store::LicenseStore;

pub const TEST_PASSWORD: &str = "s3cret-Admin";

/// Builds a service over a fresh in-memory store.
pub fn service() -> LicenseService {
    LicenseService::new(
        LicenseStore::open_in_memory().unwrap(),
        AdminSecret::new(TEST_PASSWORD),
    )
}

/// A create request with only an expiry date.
pub fn request(expiry_date: &str) -> NewLicense {
    NewLicense {
        expiry_date: Some(expiry_date.to_string()),
        ..NewLicense::default()
    }
}

/// A create request with an explicit key.
pub fn request_with_key(key: &str, expiry_date: &str) -> NewLicense {
    NewLicense {
        license_key: Some(key.to_string()),
        ..request(expiry_date)
    }
}

/// `now + offset` as a naive local ISO-8601 date-time.
pub fn local_iso(now: DateTime<Local>, offset: Duration) -> String {
    (now + offset).naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}
