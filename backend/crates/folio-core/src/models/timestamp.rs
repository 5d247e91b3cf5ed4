//! Timestamp parsing for content records.
//!
//! The CMS writes `createdAt`/`updatedAt` as RFC 3339 strings, while dates
//! picked in the admin editor arrive as bare `YYYY-MM-DD` values. Both are
//! accepted and normalised to UTC.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339, zone-less ISO-8601 or bare date string into UTC.
#[track_caller]
pub fn parse_timestamp(value: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(CoreError::InvalidTimestamp {
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Serde helper for required timestamp fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).map_err(serde::de::Error::custom)
}

/// Serde helper for optional timestamp fields; `null` and `""` become `None`
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_timestamp(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
