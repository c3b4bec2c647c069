//! Timestamp formatting for timestamp segments
//!
//! Provides the formats a timestamp segment can render, and the
//! [`TimestampMode`] that decides which instant a pipeline formats.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// strftime pattern of the standard log timestamp, `yyyy-MM-dd HH:mm:ss.SSSZ`
pub const STANDARD_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f%z";

/// Timestamp format options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with milliseconds and UTC offset: `2025-01-08 18:30:45.123+0800`
    ///
    /// This is the format of the standard pipeline.
    #[default]
    Standard,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 in UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format, rendered in UTC
    ///
    /// ```
    /// use segment_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),

    /// Custom strftime format, rendered in the host's local time zone
    LocalCustom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// # Examples
    ///
    /// ```
    /// use segment_logger::core::TimestampFormat;
    /// use chrono::Utc;
    ///
    /// let format = TimestampFormat::Iso8601;
    /// let timestamp = format.format(&Utc::now());
    /// assert!(timestamp.ends_with('Z'));
    /// ```
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Standard => datetime
                .with_timezone(&Local)
                .format(STANDARD_PATTERN)
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
            TimestampFormat::LocalCustom(format_str) => datetime
                .with_timezone(&Local)
                .format(format_str)
                .to_string(),
        }
    }
}

/// Which instant the timestamp segments of a pipeline render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampMode {
    /// Read the clock when the line is rendered. One reading is shared by
    /// every timestamp segment of that line.
    #[default]
    RenderTime,
    /// Use the timestamp captured when the event was constructed
    EventTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_standard_format_shape() {
        let result = TimestampFormat::Standard.format(&fixed_datetime());
        // yyyy-MM-dd HH:mm:ss.SSS followed by a +hhmm / -hhmm offset
        assert_eq!(result.chars().count(), 28, "unexpected shape: {}", result);
        assert_eq!(&result[4..5], "-");
        assert_eq!(&result[10..11], " ");
        assert_eq!(&result[19..20], ".");
        assert!(&result[23..24] == "+" || &result[23..24] == "-");
        assert!(result.ends_with(&fixed_datetime().with_timezone(&Local).format("%z").to_string()));
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        let seconds: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        let micros: i64 = TimestampFormat::UnixMicros
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix micros timestamp");

        assert_eq!(seconds, 1736332245);
        assert_eq!(millis, 1736332245123);
        assert_eq!(micros, 1736332245123456);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_local_custom_matches_local_zone() {
        let format = TimestampFormat::LocalCustom("%H:%M".to_string());
        let expected = fixed_datetime().with_timezone(&Local).format("%H:%M").to_string();
        assert_eq!(format.format(&fixed_datetime()), expected);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Standard);
        assert_eq!(TimestampMode::default(), TimestampMode::RenderTime);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&TimestampFormat::Standard).expect("serialize");
        assert_eq!(json, "\"Standard\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));

        let mode: TimestampMode = serde_json::from_str("\"EventTime\"").expect("deserialize mode");
        assert_eq!(mode, TimestampMode::EventTime);
    }
}
