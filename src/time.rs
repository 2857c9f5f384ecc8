//! Conversions for the Mandrill timestamp convention.
//!
//! The API represents all date-times as UTC strings in the fixed format
//! `YYYY-MM-DD HH:MM:SS`, with no timezone suffix.

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};

/// The fixed timestamp format used by the API.
pub const MANDRILL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a Mandrill timestamp string into a UTC instant.
pub fn from_mandrill_time(s: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(s, MANDRILL_TIME_FORMAT).map(|naive| naive.and_utc())
}

/// Format an instant as a Mandrill timestamp string, converting to UTC first.
pub fn to_mandrill_time<Tz: TimeZone>(t: DateTime<Tz>) -> String {
    t.with_timezone(&Utc)
        .format(MANDRILL_TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn parse_valid_timestamp() {
        let t = from_mandrill_time("2015-12-04 12:15:30").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2015, 12, 4, 12, 15, 30).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(from_mandrill_time("2015-12-04T12:15:30Z").is_err());
        assert!(from_mandrill_time("not a timestamp").is_err());
        assert!(from_mandrill_time("").is_err());
    }

    #[test]
    fn format_converts_to_utc() {
        // UTC-5, i.e. 12:15:30 local is 17:15:30 UTC
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2015, 12, 4, 12, 15, 30).unwrap();
        assert_eq!(to_mandrill_time(local), "2015-12-04 17:15:30");
    }

    #[test]
    fn round_trip_at_whole_seconds() {
        let instants = [
            Utc.with_ymd_and_hms(2015, 12, 4, 17, 15, 30).unwrap(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
        ];
        for t in instants {
            let parsed = from_mandrill_time(&to_mandrill_time(t)).unwrap();
            assert_eq!(parsed, t);
        }

        // sub-second precision is truncated by the format
        let t = Utc
            .with_ymd_and_hms(2015, 12, 4, 17, 15, 30)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let parsed = from_mandrill_time(&to_mandrill_time(t)).unwrap();
        assert_eq!(parsed, t.with_nanosecond(0).unwrap());
    }

    #[test]
    fn format_string_round_trips_exactly() {
        let s = "2015-12-04 12:15:30";
        assert_eq!(to_mandrill_time(from_mandrill_time(s).unwrap()), s);
    }
}
