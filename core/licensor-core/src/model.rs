//! The license record and the inputs that create and modify it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LicenseResult;
use crate::expiry::Expiry;

/// A stored license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Storage-assigned identifier. Never reused after deletion.
    pub id: i64,
    /// Unique license key.
    pub license_key: String,
    /// Creation time, set once by the store.
    pub created_at: DateTime<Utc>,
    /// Expiry as the ISO-8601 string it was supplied with.
    pub expiry_date: String,
    /// Administrative on/off switch, independent of expiry.
    pub active: bool,
    /// Free-text owner reference.
    pub user_id: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl License {
    /// Parses the stored expiry date.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidExpiry`](crate::LicenseError::InvalidExpiry)
    /// if the stored value is not a recognizable date.
    pub fn expiry(&self) -> LicenseResult<Expiry> {
        Expiry::parse(&self.expiry_date)
    }
}

/// A create request as received from a caller. Every field is optional here;
/// the service decides which absences are errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLicense {
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated create request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseDraft {
    pub license_key: String,
    pub expiry_date: String,
    pub active: bool,
    pub user_id: Option<String>,
    pub notes: Option<String>,
}

impl LicenseDraft {
    /// Creates an active draft with no owner or notes.
    pub fn new(license_key: impl Into<String>, expiry_date: impl Into<String>) -> Self {
        Self {
            license_key: license_key.into(),
            expiry_date: expiry_date.into(),
            active: true,
            user_id: None,
            notes: None,
        }
    }
}

/// A partial update. Each field is applied only when present.
///
/// `user_id` and `notes` distinguish an absent field (`None`) from an
/// explicit `null` (`Some(None)`), which clears the stored value. An explicit
/// `null` for `active` deactivates the license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "Option::is_none"
    )]
    pub active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

impl LicensePatch {
    /// Returns true if the patch would not change any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expiry_date.is_none()
            && self.active.is_none()
            && self.user_id.is_none()
            && self.notes.is_none()
    }
}

// A field that is present in the input, even as `null`, becomes `Some(..)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn null_as_false<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|active| Some(active.unwrap_or(false)))
}
