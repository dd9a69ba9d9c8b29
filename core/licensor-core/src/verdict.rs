//! The verification decision.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::LicenseResult;
use crate::model::License;

/// Why a key did not verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// No key was supplied.
    NotProvided,
    /// No license has this key.
    NotFound,
    /// The license's active flag is off.
    Deactivated,
    /// The license's expiry date has passed.
    Expired,
}

impl InvalidReason {
    /// Human-readable explanation returned to callers.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotProvided => "license not provided",
            Self::NotFound => "license not found",
            Self::Deactivated => "license deactivated",
            Self::Expired => "license expired",
        }
    }
}

/// The outcome of verifying a key. Both variants are ordinary results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The key grants access until `expiry_date`.
    Valid {
        /// The stored expiry string, echoed unchanged.
        expiry_date: String,
    },
    /// The key does not grant access.
    Invalid(InvalidReason),
}

impl Verdict {
    /// Decides validity for the record found by a key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's expiry date cannot be parsed. That is
    /// corrupt data, not an invalid license.
    pub fn evaluate(found: Option<&License>, now: DateTime<Local>) -> LicenseResult<Self> {
        let Some(license) = found else {
            return Ok(Self::Invalid(InvalidReason::NotFound));
        };
        if !license.active {
            return Ok(Self::Invalid(InvalidReason::Deactivated));
        }
        if license.expiry()?.has_passed(now) {
            return Ok(Self::Invalid(InvalidReason::Expired));
        }
        Ok(Self::Valid {
            expiry_date: license.expiry_date.clone(),
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The echoed expiry date for a valid key.
    #[must_use]
    pub fn expiry_date(&self) -> Option<&str> {
        match self {
            Self::Valid { expiry_date } => Some(expiry_date),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid { .. } => "license valid",
            Self::Invalid(reason) => reason.message(),
        }
    }
}
