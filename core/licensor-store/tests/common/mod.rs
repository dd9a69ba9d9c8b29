//! Shared test helpers for store tests.

#![allow(dead_code)]

use licensor_core::{License, LicenseDraft};
use licensor_store::LicenseStore;

/// Opens a fresh in-memory store.
pub fn store() -> LicenseStore {
    LicenseStore::open_in_memory().unwrap()
}

/// Inserts an active license expiring far in the future.
pub fn insert(store: &LicenseStore, key: &str) -> License {
    store.create(&LicenseDraft::new(key, "2099-12-31T23:59:59Z")).unwrap()
}
