mod common;

use common::license_expiring;
use licensor_core::{LicenseDraft, LicensePatch, NewLicense};
use pretty_assertions::assert_eq;

// ── LicensePatch ─────────────────────────────────────────────────

#[test]
fn empty_json_object_is_empty_patch() {
    let patch: LicensePatch = serde_json::from_str("{}").unwrap();
    assert!(patch.is_empty());
}

#[test]
fn unknown_fields_do_not_count() {
    let patch: LicensePatch = serde_json::from_str(r#"{"license_key":"X","id":4}"#).unwrap();
    assert!(patch.is_empty());
}

#[test]
fn explicit_null_differs_from_absent() {
    let patch: LicensePatch = serde_json::from_str(r#"{"notes":null}"#).unwrap();
    assert_eq!(patch.notes, Some(None));
    assert_eq!(patch.user_id, None);
    assert!(!patch.is_empty());
}

#[test]
fn null_active_means_deactivate() {
    let patch: LicensePatch = serde_json::from_str(r#"{"active":null}"#).unwrap();
    assert_eq!(patch.active, Some(false));
    assert!(!patch.is_empty());

    let patch: LicensePatch = serde_json::from_str(r#"{"active":true}"#).unwrap();
    assert_eq!(patch.active, Some(true));

    let patch: LicensePatch = serde_json::from_str(r#"{"notes":"n"}"#).unwrap();
    assert_eq!(patch.active, None);
}

#[test]
fn patch_serialization_skips_absent_fields() {
    let patch = LicensePatch {
        expiry_date: Some("2031-01-01".into()),
        ..LicensePatch::default()
    };
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"expiry_date":"2031-01-01"}"#);
}

// ── NewLicense / LicenseDraft ────────────────────────────────────

#[test]
fn new_license_fields_default_to_absent() {
    let new: NewLicense = serde_json::from_str("{}").unwrap();
    assert_eq!(new, NewLicense::default());
}

#[test]
fn draft_defaults_to_active() {
    let draft = LicenseDraft::new("KEY", "2030-01-01");
    assert!(draft.active);
    assert_eq!(draft.user_id, None);
    assert_eq!(draft.notes, None);
}

#[test]
fn license_serializes_all_columns() {
    let license = license_expiring("2030-01-01");
    let value = serde_json::to_value(&license).unwrap();
    for field in ["id", "license_key", "created_at", "expiry_date", "active", "user_id", "notes"] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
}
