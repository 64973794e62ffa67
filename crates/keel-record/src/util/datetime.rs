//! RFC 3339 timestamp parsing and formatting.
//!
//! The wire carries timestamps as RFC 3339 strings inside `date`-tagged
//! objects. Decoding accepts any valid offset and normalizes to UTC;
//! encoding always renders UTC (`Z` suffix) at whole-second resolution, so
//! sub-second precision and source offsets do not survive a round trip.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::SchemaError;

/// Parses an RFC 3339 timestamp string into a UTC instant.
pub fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, SchemaError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| SchemaError::InvalidTimestamp {
            value: raw.to_string(),
            message: err.to_string(),
        })
}

/// Formats a UTC instant as an RFC 3339 string with `Z` offset, truncated to
/// whole seconds.
pub fn format_rfc3339_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc() {
        let instant = parse_rfc3339("2017-07-23T19:30:24Z").unwrap();
        assert_eq!(instant.timestamp(), 1500838224);
    }

    #[test]
    fn test_parse_normalizes_offset_to_utc() {
        let with_offset = parse_rfc3339("2017-07-23T21:30:24+02:00").unwrap();
        let utc = parse_rfc3339("2017-07-23T19:30:24Z").unwrap();
        assert_eq!(with_offset, utc);
    }

    #[test]
    fn test_parse_keeps_subseconds() {
        let instant = parse_rfc3339("2017-07-23T19:30:24.500Z").unwrap();
        assert_eq!(instant.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_rfc3339("yesterday").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_format_whole_seconds_utc() {
        let instant = Utc.with_ymd_and_hms(2017, 7, 23, 19, 30, 24).unwrap();
        assert_eq!(format_rfc3339_utc(&instant), "2017-07-23T19:30:24Z");
    }

    #[test]
    fn test_format_truncates_subseconds() {
        let instant = DateTime::from_timestamp(1500838224, 750_000_000).unwrap();
        assert_eq!(format_rfc3339_utc(&instant), "2017-07-23T19:30:24Z");
    }
}
