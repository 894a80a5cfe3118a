//! Comparisons, differences and clock-relative checks.

use crate::Timestamp;
use crate::clock::Clock;
use crate::error::Result;
use crate::iso::IntoTimestamp;
use chrono::{Datelike, TimeDelta};

fn both(a: impl IntoTimestamp, b: impl IntoTimestamp) -> Option<(Timestamp, Timestamp)> {
    Some((a.into_timestamp().ok()?, b.into_timestamp().ok()?))
}

fn difference(a: impl IntoTimestamp, b: impl IntoTimestamp) -> Result<TimeDelta> {
    Ok(a.into_timestamp()? - b.into_timestamp()?)
}

/// `a` is strictly earlier than `b`. False if either is invalid.
pub fn is_date_before(a: impl IntoTimestamp, b: impl IntoTimestamp) -> bool {
    both(a, b).is_some_and(|(a, b)| a < b)
}

/// `a` is strictly later than `b`. False if either is invalid.
pub fn is_date_after(a: impl IntoTimestamp, b: impl IntoTimestamp) -> bool {
    both(a, b).is_some_and(|(a, b)| a > b)
}

/// Same calendar day, judged in `a`'s offset.
pub fn is_same_day_as(a: impl IntoTimestamp, b: impl IntoTimestamp) -> bool {
    both(a, b).is_some_and(|(a, b)| a.date_naive() == b.with_timezone(a.offset()).date_naive())
}

/// Whole days in `a - b`, truncated toward zero.
pub fn get_days_difference(a: impl IntoTimestamp, b: impl IntoTimestamp) -> Result<i64> {
    difference(a, b).map(|d| d.num_days())
}

/// Whole hours in `a - b`, truncated toward zero.
pub fn get_hours_difference(a: impl IntoTimestamp, b: impl IntoTimestamp) -> Result<i64> {
    difference(a, b).map(|d| d.num_hours())
}

/// Whole minutes in `a - b`, truncated toward zero.
pub fn get_minutes_difference(a: impl IntoTimestamp, b: impl IntoTimestamp) -> Result<i64> {
    difference(a, b).map(|d| d.num_minutes())
}

/// Completed years since `birth`, on the clock's calendar.
pub fn get_age(birth: impl IntoTimestamp, clock: &impl Clock) -> Result<i32> {
    let birth = birth.into_timestamp()?;
    let now = clock.now();
    let age = now.year() - birth.year();
    if (now.month(), now.day()) < (birth.month(), birth.day()) {
        Ok(age - 1)
    } else {
        Ok(age)
    }
}

pub fn is_past(input: impl IntoTimestamp, clock: &impl Clock) -> bool {
    input.into_timestamp().is_ok_and(|ts| ts < clock.now())
}

pub fn is_future(input: impl IntoTimestamp, clock: &impl Clock) -> bool {
    input.into_timestamp().is_ok_and(|ts| ts > clock.now())
}

/// Same calendar day as the clock, in the clock's offset.
pub fn is_today(input: impl IntoTimestamp, clock: &impl Clock) -> bool {
    let now = clock.now();
    is_same_day_as(now, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;

    fn clock() -> FixedClock {
        FixedClock::at("2024-06-15T12:00:00Z").unwrap()
    }

    #[test]
    fn test_before_and_after() {
        assert!(is_date_before("2024-01-15", "2024-01-16"));
        assert!(!is_date_before("2024-01-16", "2024-01-15"));
        assert!(!is_date_before("2024-01-15", "2024-01-15"));
        assert!(is_date_after("2024-01-16", "2024-01-15"));
        assert!(!is_date_after("2024-01-15", "2024-01-16"));
    }

    #[test]
    fn test_comparisons_with_invalid_input() {
        assert!(!is_date_before("invalid", "2024-01-16"));
        assert!(!is_date_after("2024-01-16", "invalid"));
        assert!(!is_same_day_as("invalid", "invalid"));
    }

    #[test]
    fn test_is_same_day_as() {
        assert!(is_same_day_as("2024-01-15", "2024-01-15T15:30:00"));
        assert!(!is_same_day_as("2024-01-15", "2024-01-16"));
        // 23:30 UTC is already the 16th in Tokyo.
        assert!(is_same_day_as("2024-01-16T08:00:00+09:00", "2024-01-15T23:30:00Z"));
        assert!(!is_same_day_as("2024-01-15T12:00:00Z", "2024-01-15T23:30:00-05:00"));
    }

    #[test]
    fn test_differences() {
        let later = "2024-01-17T12:30:00";
        let earlier = "2024-01-15T10:00:00";
        assert_eq!(get_days_difference(later, earlier).unwrap(), 2);
        assert_eq!(get_hours_difference(later, earlier).unwrap(), 50);
        assert_eq!(get_minutes_difference(later, earlier).unwrap(), 3030);
    }

    #[test]
    fn test_differences_truncate_toward_zero() {
        let later = "2024-01-17T12:30:00";
        let earlier = "2024-01-15T10:00:00";
        assert_eq!(get_days_difference(earlier, later).unwrap(), -2);
        assert_eq!(get_hours_difference(earlier, later).unwrap(), -50);
        assert_eq!(get_minutes_difference("2024-01-15T10:00:59", "2024-01-15T10:00:00").unwrap(), 0);
    }

    #[test]
    fn test_difference_of_invalid_input() {
        assert!(matches!(
            get_days_difference("invalid", "2024-01-15"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_get_age() {
        let c = clock();
        assert_eq!(get_age("1990-01-15", &c).unwrap(), 34);
        assert_eq!(get_age("1990-06-15", &c).unwrap(), 34);
        assert_eq!(get_age("1990-06-16", &c).unwrap(), 33);
        assert_eq!(get_age("1990-12-01", &c).unwrap(), 33);
        assert!(get_age("not a date", &c).is_err());
    }

    #[test]
    fn test_past_future_today() {
        let c = clock();
        assert!(is_past("2024-06-15T11:59:59Z", &c));
        assert!(!is_past("2024-06-15T12:00:00Z", &c));
        assert!(is_future("2024-06-15T12:00:01Z", &c));
        assert!(!is_future("2024-06-15T12:00:00Z", &c));
        assert!(is_today("2024-06-15T00:00:00Z", &c));
        assert!(is_today("2024-06-15T23:59:59Z", &c));
        assert!(!is_today("2024-06-16T00:00:00Z", &c));
        assert!(!is_past("invalid", &c));
        assert!(!is_today("invalid", &c));
    }
}
