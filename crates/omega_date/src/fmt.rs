// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Formatting and parsing for [`OmegaDate`].
//!
//! Dates render through [`Display`] in ISO 8601 format with a `Z` suffix, e.g.
//! `2024-08-21T07:04:37Z`, and parse back through [`FromStr`]. The
//! [`OmegaDate::format_date`] method provides the default calendar-day
//! rendering, and [`OmegaDate::strftime`] / [`OmegaDate::strptime`] support
//! custom `strftime`-style patterns.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::Time;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::{Error, OmegaDate, Result};

/// The rendering used by [`OmegaDate::format_date`].
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

impl OmegaDate {
    /// Formats the calendar date as `YYYY-MM-DD`.
    ///
    /// The rendering is deterministic: the same instant always produces the
    /// same string, in UTC like every other calendar accessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date: OmegaDate = "2024-08-21T07:04:37Z".parse()?;
    /// assert_eq!(date.format_date(), "2024-08-21");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "formatting with the built-in date pattern is guaranteed to never fail"
    )]
    pub fn format_date(&self) -> String {
        strtime::format(DEFAULT_DATE_FORMAT, &self.zoned)
            .expect("the built-in date format is always valid")
    }

    /// Formats the date with a custom `strftime`-style pattern.
    ///
    /// Returns an error if the pattern is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date: OmegaDate = "2024-08-21T07:04:37Z".parse()?;
    /// assert_eq!(date.strftime("%d/%m/%Y %H:%M")?, "21/08/2024 07:04");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strftime(&self, format: &str) -> Result<String> {
        strtime::format(format, &self.zoned).map_err(Error::jiff)
    }

    /// Parses a date from `input` using a `strftime`-style pattern.
    ///
    /// Time-of-day fields missing from the pattern default to midnight. The
    /// parsed components are interpreted in UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use omega_date::OmegaDate;
    ///
    /// let date = OmegaDate::strptime("%Y-%m-%d", "2024-08-21")?;
    /// assert_eq!(date.to_string(), "2024-08-21T00:00:00Z");
    ///
    /// let date = OmegaDate::strptime("%d/%m/%Y %H:%M", "21/08/2024 07:04")?;
    /// assert_eq!(date.to_string(), "2024-08-21T07:04:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strptime(format: &str, input: &str) -> Result<Self> {
        let fields = strtime::parse(format, input).map_err(Error::jiff)?;

        let datetime = match fields.to_datetime() {
            Ok(datetime) => datetime,
            // Date-only patterns leave the time fields unset; default to midnight.
            Err(_) => fields.to_date().map_err(Error::jiff)?.to_datetime(Time::midnight()),
        };

        let zoned = datetime.to_zoned(TimeZone::UTC).map_err(Error::jiff)?;
        Ok(Self { zoned })
    }
}

/// Formats the date into a string.
///
/// The date is formatted in ISO 8601 format in UTC. For example:
/// `2024-08-21T07:04:37Z`. Sub-second components are rendered only when
/// present.
impl Display for OmegaDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.zoned.timestamp(), f)
    }
}

/// Parses a date from an ISO 8601 / RFC 3339 string, e.g. `2024-08-21T07:04:37Z`.
///
/// Strings carrying a UTC offset are accepted; the instant is reinterpreted in
/// UTC.
impl FromStr for OmegaDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let timestamp = s.parse::<Timestamp>().map_err(Error::jiff)?;
        Ok(Self::from_timestamp(timestamp))
    }
}

/// Serializes `OmegaDate` as an ISO 8601 string.
#[cfg(any(feature = "serde", test))]
impl serde_core::Serialize for OmegaDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes `OmegaDate` from an ISO 8601 string.
#[cfg(any(feature = "serde", test))]
impl<'de> serde_core::Deserialize<'de> for OmegaDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse::<Self>()
            .map_err(serde_core::de::Error::custom)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn format_date_is_deterministic() {
        let date: OmegaDate = "2024-08-21T07:04:37Z".parse().unwrap();

        assert_eq!(date.format_date(), "2024-08-21");
        assert_eq!(date.format_date(), date.format_date());
    }

    #[test]
    fn format_date_ignores_time_of_day() {
        let morning: OmegaDate = "2024-08-21T00:00:01Z".parse().unwrap();
        let evening: OmegaDate = "2024-08-21T23:59:59Z".parse().unwrap();

        assert_eq!(morning.format_date(), evening.format_date());
    }

    #[test]
    fn display_renders_iso_8601() {
        let date: OmegaDate = "2024-08-21T07:04:37Z".parse().unwrap();
        assert_eq!(date.to_string(), "2024-08-21T07:04:37Z");
    }

    #[test]
    fn parse_applies_utc_offset() {
        let date: OmegaDate = "2024-08-06T23:30:00+02:00".parse().unwrap();
        assert_eq!(date.to_string(), "2024-08-06T21:30:00Z");
    }

    #[test]
    fn parse_err() {
        "not a date".parse::<OmegaDate>().unwrap_err();

        // A civil datetime without an offset does not name an instant.
        "2024-08-21T07:04:37".parse::<OmegaDate>().unwrap_err();
    }

    #[test]
    fn strftime_custom_pattern() {
        let date: OmegaDate = "2024-08-21T07:04:37Z".parse().unwrap();

        assert_eq!(date.strftime("%Y-%m-%d %H:%M:%S").unwrap(), "2024-08-21 07:04:37");

        // A dangling `%` is not a valid pattern.
        date.strftime("%").unwrap_err();
    }

    #[test]
    fn strptime_date_only_defaults_to_midnight() {
        let date = OmegaDate::strptime("%Y-%m-%d", "2024-08-21").unwrap();

        assert_eq!(date.to_string(), "2024-08-21T00:00:00Z");
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn strptime_with_time_fields() {
        let date = OmegaDate::strptime("%d/%m/%Y %H:%M", "21/08/2024 07:04").unwrap();
        assert_eq!(date.to_string(), "2024-08-21T07:04:00Z");
    }

    #[test]
    fn strptime_rejects_mismatched_input() {
        OmegaDate::strptime("%Y-%m-%d", "21/08/2024").unwrap_err();
        OmegaDate::strptime("%H:%M", "07:04").unwrap_err(); // no date at all
    }

    #[test]
    fn strftime_strptime_round_trip() {
        let date: OmegaDate = "2024-08-21T07:04:37Z".parse().unwrap();

        let formatted = date.strftime("%Y-%m-%dT%H:%M:%S").unwrap();
        let parsed = OmegaDate::strptime("%Y-%m-%dT%H:%M:%S", &formatted).unwrap();

        assert_eq!(parsed, date);
    }

    #[test]
    fn serde_round_trip() {
        let date: OmegaDate = "2024-02-29T12:01:59Z".parse().unwrap();

        let serialized = serde_json::to_string(&date).unwrap();
        assert_eq!(serialized, "\"2024-02-29T12:01:59Z\"");

        let deserialized: OmegaDate = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, date);
    }

    #[test]
    fn serde_in_struct() {
        #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
        struct Event {
            name: String,
            occurred_at: OmegaDate,
        }

        let event = Event {
            name: "deploy".to_owned(),
            occurred_at: "2024-08-21T07:04:37Z".parse().unwrap(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"name":"deploy","occurred_at":"2024-08-21T07:04:37Z"}"#);

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn serde_deserialize_invalid() {
        let result: std::result::Result<OmegaDate, _> = serde_json::from_str("\"invalid-date\"");
        assert!(result.is_err(), "Expected deserialization to fail for invalid input");
    }
}
