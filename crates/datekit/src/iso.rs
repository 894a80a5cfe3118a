//! ISO-8601 reading and writing.
//!
//! Accepted date forms: `YYYY-MM-DD`, `YYYYMMDD`, `YYYY-MM`, `YYYY`,
//! `YYYY-DDD` (ordinal) and `YYYY-Www[-D]` (week date). A time may follow
//! after `T` or a space: `HH`, `HH:mm` or `HH:mm:ss` (colons optional), with
//! a `.` or `,` fraction on the last component and an optional offset `Z`,
//! `±HH`, `±HH:mm` or `±HHmm`.

use crate::Timestamp;
use crate::error::{Error, Result};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeDelta, TimeZone, Timelike, Utc, Weekday,
};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

static CALENDAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:-(\d{2})(?:-(\d{2}))?|(\d{2})(\d{2}))?$").expect("valid calendar regex")
});

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-?(\d{3})$").expect("valid ordinal regex"));

static WEEK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-?W(\d{2})(?:-?(\d))?$").expect("valid week date regex")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})(?::?(\d{2})(?::?(\d{2}))?)?(?:[.,](\d+))?$").expect("valid time regex")
});

static OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-])(\d{2})(?::?(\d{2}))?$").expect("valid offset regex"));

const ISO_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Anything a date function accepts as input.
///
/// Text goes through [`parse_iso`]; chrono values convert directly.
pub trait IntoTimestamp {
    /// Resolve to an instant with its offset.
    fn into_timestamp(self) -> Result<Timestamp>;
}

impl IntoTimestamp for Timestamp {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self)
    }
}

impl IntoTimestamp for &Timestamp {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(*self)
    }
}

impl IntoTimestamp for DateTime<Utc> {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self.fixed_offset())
    }
}

impl IntoTimestamp for DateTime<Local> {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self.fixed_offset())
    }
}

/// Midnight UTC.
impl IntoTimestamp for NaiveDate {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    }
}

/// Read as UTC.
impl IntoTimestamp for NaiveDateTime {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self.and_utc().fixed_offset())
    }
}

impl IntoTimestamp for &str {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_iso(self)
    }
}

impl IntoTimestamp for &String {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_iso(self)
    }
}

impl IntoTimestamp for String {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_iso(&self)
    }
}

/// Parse ISO-8601 text. Text without an offset is read as UTC.
pub fn parse_iso(text: &str) -> Result<Timestamp> {
    parse_iso_in(text, Utc.fix())
}

/// Parse ISO-8601 text, reading text without an offset in `default_offset`.
pub fn parse_iso_in(text: &str, default_offset: FixedOffset) -> Result<Timestamp> {
    let trimmed = text.trim();
    let (date_text, time_text) = match trimmed.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time)),
        None => (trimmed, None),
    };

    let date = parse_date(date_text)?;
    let (since_midnight, offset) = match time_text {
        None => (TimeDelta::zero(), default_offset),
        Some(time_text) => {
            let (clock, offset_text) = match time_text.find(['Z', 'z', '+', '-']) {
                Some(at) => (&time_text[..at], Some(&time_text[at..])),
                None => (time_text, None),
            };
            let offset = match offset_text {
                Some(offset_text) => parse_offset(offset_text)?,
                None => default_offset,
            };
            (parse_time(clock)?, offset)
        }
    };

    date.and_time(NaiveTime::MIN)
        .checked_add_signed(since_midnight)
        .and_then(|local| local.and_local_timezone(offset).single())
        .ok_or_else(|| Error::OutOfRange(trimmed.to_string()))
}

/// Parse ISO-8601 text (alias kept for symmetry with [`to_iso_string`]).
pub fn from_iso_string(text: &str) -> Result<Timestamp> {
    parse_iso(text)
}

/// `YYYY-MM-DDTHH:mm:ss.sssZ` in UTC.
///
/// More fraction digits appear only when the instant has sub-millisecond
/// precision, so the output always reads back to the same instant.
pub fn to_iso_string<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    let utc = ts.with_timezone(&Utc);
    let precision = if utc.nanosecond() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    utc.to_rfc3339_opts(precision, true)
}

/// True when `input` resolves to a real instant.
pub fn is_valid_date(input: impl IntoTimestamp) -> bool {
    input.into_timestamp().is_ok()
}

fn number<T: FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    let out_of_range = || Error::OutOfRange(text.to_string());

    if let Some(caps) = CALENDAR.captures(text) {
        let year = number(&caps, 1).ok_or_else(out_of_range)?;
        let month = number(&caps, 2).or_else(|| number(&caps, 4)).unwrap_or(1);
        let day = number(&caps, 3).or_else(|| number(&caps, 5)).unwrap_or(1);
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(out_of_range);
    }

    if let Some(caps) = ORDINAL.captures(text) {
        let year = number(&caps, 1).ok_or_else(out_of_range)?;
        let ordinal = number(&caps, 2).ok_or_else(out_of_range)?;
        return NaiveDate::from_yo_opt(year, ordinal).ok_or_else(out_of_range);
    }

    if let Some(caps) = WEEK.captures(text) {
        let year = number(&caps, 1).ok_or_else(out_of_range)?;
        let week = number(&caps, 2).ok_or_else(out_of_range)?;
        let day: usize = number(&caps, 3).unwrap_or(1);
        let weekday = day
            .checked_sub(1)
            .and_then(|d| ISO_WEEKDAYS.get(d))
            .copied()
            .ok_or_else(out_of_range)?;
        return NaiveDate::from_isoywd_opt(year, week, weekday).ok_or_else(out_of_range);
    }

    Err(Error::InvalidFormat(text.to_string()))
}

/// Time of day as an offset from midnight. `24:00` is the next midnight.
fn parse_time(text: &str) -> Result<TimeDelta> {
    let caps = TIME
        .captures(text)
        .ok_or_else(|| Error::InvalidFormat(text.to_string()))?;

    let hour: i64 = number(&caps, 1).unwrap_or(0);
    let minute: Option<i64> = number(&caps, 2);
    let second: Option<i64> = number(&caps, 3);

    let unit = match (minute, second) {
        (_, Some(_)) => NANOS_PER_SECOND,
        (Some(_), None) => NANOS_PER_MINUTE,
        (None, None) => NANOS_PER_HOUR,
    };
    let fraction = caps
        .get(4)
        .map(|m| fraction_nanos(m.as_str(), unit))
        .unwrap_or(0);
    let (minute, second) = (minute.unwrap_or(0), second.unwrap_or(0));

    let in_range = minute <= 59
        && second <= 59
        && (hour <= 23 || (hour == 24 && minute == 0 && second == 0 && fraction == 0));
    if !in_range {
        return Err(Error::OutOfRange(text.to_string()));
    }

    Ok(TimeDelta::nanoseconds(
        hour * NANOS_PER_HOUR + minute * NANOS_PER_MINUTE + second * NANOS_PER_SECOND + fraction,
    ))
}

/// `digits` read as `0.digits` of `unit_nanos`, truncated.
fn fraction_nanos(digits: &str, unit_nanos: i64) -> i64 {
    let digits = &digits[..digits.len().min(18)];
    let numerator: i128 = digits.parse().unwrap_or(0);
    let denominator = 10i128.pow(digits.len() as u32);
    (numerator * i128::from(unit_nanos) / denominator) as i64
}

fn parse_offset(text: &str) -> Result<FixedOffset> {
    if text.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    let caps = OFFSET
        .captures(text)
        .ok_or_else(|| Error::InvalidFormat(text.to_string()))?;
    let hours: i32 = number(&caps, 2).unwrap_or(0);
    let minutes: i32 = number(&caps, 3).unwrap_or(0);
    if hours > 23 || minutes > 59 {
        return Err(Error::OutOfRange(text.to_string()));
    }

    let seconds = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| Error::OutOfRange(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap().fixed_offset()
    }

    #[test]
    fn test_parse_calendar_forms() {
        assert_eq!(parse_iso("2024-01-15").unwrap(), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(parse_iso("20240115").unwrap(), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(parse_iso("2024-03").unwrap(), utc(2024, 3, 1, 0, 0, 0));
        assert_eq!(parse_iso("2024").unwrap(), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_ordinal_and_week_dates() {
        assert_eq!(parse_iso("2024-046").unwrap(), utc(2024, 2, 15, 0, 0, 0));
        assert_eq!(parse_iso("2024-366").unwrap(), utc(2024, 12, 31, 0, 0, 0));
        assert_eq!(parse_iso("2024-W03").unwrap(), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(parse_iso("2024-W03-5").unwrap(), utc(2024, 1, 19, 0, 0, 0));
        assert_eq!(parse_iso("2024W035").unwrap(), utc(2024, 1, 19, 0, 0, 0));
    }

    #[test]
    fn test_parse_times() {
        assert_eq!(
            parse_iso("2024-01-15T10:30:00").unwrap(),
            utc(2024, 1, 15, 10, 30, 0)
        );
        assert_eq!(
            parse_iso("2024-01-15 10:30").unwrap(),
            utc(2024, 1, 15, 10, 30, 0)
        );
        assert_eq!(parse_iso("2024-01-15T10").unwrap(), utc(2024, 1, 15, 10, 0, 0));
        assert_eq!(
            parse_iso("20240115T103045").unwrap(),
            utc(2024, 1, 15, 10, 30, 45)
        );
    }

    #[test]
    fn test_parse_fractions() {
        let ts = parse_iso("2024-01-15T10:30:00.123Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 123);

        let ts = parse_iso("2024-01-15T10:30,5").unwrap();
        assert_eq!(ts, utc(2024, 1, 15, 10, 30, 30));

        let ts = parse_iso("2024-01-15T10.25").unwrap();
        assert_eq!(ts, utc(2024, 1, 15, 10, 15, 0));
    }

    #[test]
    fn test_parse_offsets() {
        let ts = parse_iso("2024-01-15T10:30:00+05:30").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(ts.with_timezone(&Utc), utc(2024, 1, 15, 5, 0, 0));

        let ts = parse_iso("2024-01-15T10:30:00-0800").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -8 * 3600);

        let ts = parse_iso("2024-01-15T10:30:00-03").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -3 * 3600);

        let ts = parse_iso("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_in_default_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let ts = parse_iso_in("2024-01-15T09:00", tokyo).unwrap();
        assert_eq!(ts.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));

        let explicit = parse_iso_in("2024-01-15T09:00Z", tokyo).unwrap();
        assert_eq!(explicit.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_midnight_24() {
        assert_eq!(parse_iso("2024-01-15T24:00").unwrap(), utc(2024, 1, 16, 0, 0, 0));
        assert!(matches!(
            parse_iso("2024-01-15T24:30"),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        for text in ["invalid", "", "2024-1-15", "15/01/2024", "2024-01-15T", "2024-01-15Tnoon"] {
            assert!(
                matches!(parse_iso(text), Err(Error::InvalidFormat(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_fields() {
        for text in [
            "2024-13-01",
            "2023-02-29",
            "2023-366",
            "2024-W54",
            "2024-W01-8",
            "2024-01-15T10:60",
            "2024-01-15T10:00+25:00",
        ] {
            assert!(
                matches!(parse_iso(text), Err(Error::OutOfRange(_))),
                "{text:?} should be out of range"
            );
        }
    }

    #[test]
    fn test_to_iso_string() {
        let ts = utc(2024, 1, 15, 10, 30, 0);
        assert_eq!(to_iso_string(&ts), "2024-01-15T10:30:00.000Z");

        let shifted = parse_iso("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(to_iso_string(&shifted), "2024-01-15T08:30:00.000Z");

        let micros = parse_iso("2024-01-15T10:30:00.123456Z").unwrap();
        assert_eq!(to_iso_string(&micros), "2024-01-15T10:30:00.123456Z");
    }

    #[test]
    fn test_iso_round_trip_keeps_instant() {
        for text in [
            "2024-01-15T10:30:00+05:30",
            "1999-12-31T23:59:59.999Z",
            "2024-02-29",
            "2024-W03-5T12:00-07:00",
        ] {
            let ts = parse_iso(text).unwrap();
            assert_eq!(from_iso_string(&to_iso_string(&ts)).unwrap(), ts, "{text}");
        }
    }

    #[test]
    fn test_from_iso_string_fields() {
        let ts = from_iso_string("2024-01-15T10:30:00").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 15));
        assert_eq!((ts.hour(), ts.minute()), (10, 30));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2024-01-15T10:30:00"));
        assert!(is_valid_date(utc(2024, 1, 15, 10, 30, 0)));
        assert!(is_valid_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(!is_valid_date("invalid"));
        assert!(!is_valid_date(String::from("2024-02-30")));
    }
}
