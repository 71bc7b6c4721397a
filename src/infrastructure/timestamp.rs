//! Stored timestamp text codec.
//!
//! Records written by older deployments carry timestamps in several textual
//! shapes (zone-less ISO, space separated, unpadded hours). Reads try each
//! accepted shape in order; writes always produce RFC 3339 in UTC.
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,
    #[error("unrecognised timestamp format: {0}")]
    Unrecognised(String),
}

/// Zone-less layouts, tried after RFC 3339. Values are taken as UTC.
/// `%H` also accepts a single-digit hour.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::Unrecognised(value.to_string()))
}

/// Canonical stored form, e.g. `2024-01-05T09:03:07.250Z`.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, h, m, s).unwrap()
    }

    #[test]
    fn accepts_every_legacy_shape() {
        let cases = [
            ("2024-01-05T09:03:07Z", at(9, 3, 7)),
            ("2024-01-05T18:03:07+09:00", at(9, 3, 7)),
            ("2024-01-05T09:03:07", at(9, 3, 7)),
            ("2024-01-05 09:03:07", at(9, 3, 7)),
            ("2024-01-05 9:03:07", at(9, 3, 7)),
            ("2024-01-05T9:03:07", at(9, 3, 7)),
            ("2024-01-05T09:03", at(9, 3, 0)),
            ("2024-01-05 09:03", at(9, 3, 0)),
            ("  2024-01-05T09:03:07Z ", at(9, 3, 7)),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_timestamp(raw), Ok(expected), "input {raw:?}");
        }
    }

    #[test]
    fn keeps_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-05 09:03:07.123456").unwrap();
        assert_eq!(parsed, at(9, 3, 7) + Duration::microseconds(123_456));
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(parse_timestamp("   "), Err(TimestampError::Empty));
        assert!(matches!(
            parse_timestamp("05/01/2024"),
            Err(TimestampError::Unrecognised(_))
        ));
    }

    #[test]
    fn writes_canonical_utc_and_reads_it_back() {
        let value = at(9, 3, 7) + Duration::milliseconds(250);
        let text = format_timestamp(&value);
        assert_eq!(text, "2024-01-05T09:03:07.250Z");
        assert_eq!(parse_timestamp(&text), Ok(value));
    }
}
