//! Parsing and comparison of stored expiry dates.
//!
//! Expiry dates are stored as the strings callers supplied. A trailing `Z` is
//! read as `+00:00`. A date without a time of day expires at its midnight, and
//! a time given as a bare hour means the top of that hour.
//!
//! Dates with an offset compare as instants. Dates without one compare against
//! the local wall clock; the two forms are never normalized into each other.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{LicenseError, LicenseResult};

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Expiry with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Expiry without an offset, read as local wall-clock time.
    Naive(NaiveDateTime),
}

impl Expiry {
    /// Parses an ISO-8601 date or date-time.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidExpiry`] if no supported form matches.
    pub fn parse(raw: &str) -> LicenseResult<Self> {
        let normalized = match raw.strip_suffix('Z') {
            Some(head) => format!("{head}+00:00"),
            None => raw.to_string(),
        };
        let normalized = expand_bare_hour(&normalized).unwrap_or(normalized);

        for format in ZONED_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(&normalized, format) {
                return Ok(Self::Zoned(parsed));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&normalized, format) {
                return Ok(Self::Naive(parsed));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
            return Ok(Self::Naive(date.and_time(NaiveTime::MIN)));
        }

        Err(LicenseError::InvalidExpiry(raw.to_string()))
    }

    /// Returns true if the expiry carries an offset.
    #[must_use]
    pub fn is_zoned(&self) -> bool {
        matches!(self, Self::Zoned(_))
    }

    /// Returns true if the expiry is strictly before `now`.
    ///
    /// A zoned expiry is compared with `now` as an instant. A naive expiry is
    /// compared with `now`'s local wall-clock reading.
    #[must_use]
    pub fn has_passed(&self, now: DateTime<Local>) -> bool {
        match self {
            Self::Zoned(expiry) => expiry.with_timezone(&Utc) < now.with_timezone(&Utc),
            Self::Naive(expiry) => *expiry < now.naive_local(),
        }
    }
}

// `YYYY-MM-DDTHH`, with or without an offset, is rewritten to `HH:00`.
fn expand_bare_hour(s: &str) -> Option<String> {
    let (_, rest) = NaiveDate::parse_and_remainder(s, "%Y-%m-%d").ok()?;
    let time = rest.strip_prefix(['T', ' '])?;
    let hour = time.get(..2)?;
    let tail = &time[2..];
    if !hour.bytes().all(|b| b.is_ascii_digit())
        || !(tail.is_empty() || tail.starts_with(['+', '-']))
    {
        return None;
    }
    let split = s.len() - tail.len();
    Some(format!("{}:00{}", &s[..split], tail))
}
