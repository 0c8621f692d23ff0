//! Timestamp formatting utilities
//!
//! Used for the time-of-day marker of the human-readable console style and
//! for the `timestamp` field every encoder can append.

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_event_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 15, 4, 5).unwrap();
/// assert_eq!(TimestampFormat::Kitchen.format(&at), "3:04PM");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Time of day with minute precision: `3:04PM`
    ///
    /// Default marker of the human-readable console style.
    #[default]
    Kitchen,

    /// RFC 3339 with nanoseconds and offset: `2025-01-08T10:30:45.123456789+02:00`
    ///
    /// Written under the `timestamp` key by `LogEvent::timestamp`.
    Rfc3339Nano,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123`
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_event_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Kitchen => datetime.format("%-I:%M%p").to_string(),
            TimestampFormat::Rfc3339Nano => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Local::now())
    }
}
