//! Shared test helpers for license tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use licensor_core::License;

/// A fixed reference "now" so expiry comparisons are deterministic.
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

/// Builds an active license with the given expiry string.
pub fn license_expiring(expiry_date: &str) -> License {
    License {
        id: 1,
        license_key: "TESTKEY".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        expiry_date: expiry_date.to_string(),
        active: true,
        user_id: Some("user-1".to_string()),
        notes: None,
    }
}

/// Formats `now + offset` as a naive local ISO-8601 date-time.
pub fn naive_local_from(now: DateTime<Local>, offset: Duration) -> String {
    (now + offset).naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Formats `now + offset` as a UTC date-time with a trailing `Z`.
pub fn utc_z_from(now: DateTime<Local>, offset: Duration) -> String {
    (now + offset)
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}
