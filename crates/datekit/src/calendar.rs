//! Calendar arithmetic and period boundaries.
//!
//! All calculations happen in the timestamp's own offset. Month and year
//! steps clamp the day to the end of the target month. Period ends are the
//! last millisecond of the period.

use crate::Timestamp;
use crate::error::{Error, Result};
use crate::iso::{IntoTimestamp, to_iso_string};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

/// First day of the week used by [`get_start_of_week`] and [`get_end_of_week`].
pub const WEEK_START: Weekday = Weekday::Sun;

fn overflow(ts: &Timestamp) -> Error {
    Error::OutOfRange(format!("calendar step from {}", to_iso_string(ts)))
}

/// Attach `ts`'s offset to a wall-clock time.
fn in_offset_of(ts: &Timestamp, local: NaiveDateTime) -> Result<Timestamp> {
    local
        .and_local_timezone(*ts.offset())
        .single()
        .ok_or_else(|| overflow(ts))
}

fn end_of(ts: &Timestamp, date: NaiveDate) -> Result<Timestamp> {
    let last = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| overflow(ts))?;
    in_offset_of(ts, last)
}

pub(crate) fn shift_days(ts: &Timestamp, days: i64) -> Result<Timestamp> {
    TimeDelta::try_days(days)
        .and_then(|delta| ts.checked_add_signed(delta))
        .ok_or_else(|| overflow(ts))
}

fn shift_months(ts: &Timestamp, months: i64) -> Result<Timestamp> {
    let step = u32::try_from(months.unsigned_abs()).map_err(|_| overflow(ts))?;
    let shifted = if months >= 0 {
        ts.checked_add_months(Months::new(step))
    } else {
        ts.checked_sub_months(Months::new(step))
    };
    shifted.ok_or_else(|| overflow(ts))
}

pub(crate) fn start_of_day(ts: &Timestamp) -> Result<Timestamp> {
    in_offset_of(ts, ts.date_naive().and_time(NaiveTime::MIN))
}

fn week_start_date(ts: &Timestamp, week_start: Weekday) -> Result<NaiveDate> {
    let date = ts.date_naive();
    let back = (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    date.checked_sub_signed(TimeDelta::days(i64::from(back)))
        .ok_or_else(|| overflow(ts))
}

fn first_of_month(ts: &Timestamp) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(ts.year(), ts.month(), 1).ok_or_else(|| overflow(ts))
}

/// Add `days` calendar days (negative goes back).
pub fn add_days_to_date(input: impl IntoTimestamp, days: i64) -> Result<Timestamp> {
    shift_days(&input.into_timestamp()?, days)
}

/// Go back `days` calendar days.
pub fn subtract_days_from_date(input: impl IntoTimestamp, days: i64) -> Result<Timestamp> {
    let back = days.checked_neg().ok_or(Error::OutOfRange(days.to_string()))?;
    add_days_to_date(input, back)
}

/// Add `months`, clamping the day: Jan 31 + 1 month is the last day of February.
pub fn add_months_to_date(input: impl IntoTimestamp, months: i64) -> Result<Timestamp> {
    shift_months(&input.into_timestamp()?, months)
}

/// Add `years`, clamping Feb 29 to Feb 28 in common years.
pub fn add_years_to_date(input: impl IntoTimestamp, years: i64) -> Result<Timestamp> {
    let months = years
        .checked_mul(12)
        .ok_or(Error::OutOfRange(years.to_string()))?;
    add_months_to_date(input, months)
}

/// Midnight at the start of the day.
pub fn get_start_of_day(input: impl IntoTimestamp) -> Result<Timestamp> {
    start_of_day(&input.into_timestamp()?)
}

/// `23:59:59.999` on the same day.
pub fn get_end_of_day(input: impl IntoTimestamp) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    end_of(&ts, ts.date_naive())
}

/// Midnight on the most recent `week_start` (today if it is one).
pub fn get_start_of_week_on(input: impl IntoTimestamp, week_start: Weekday) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    let first = week_start_date(&ts, week_start)?;
    in_offset_of(&ts, first.and_time(NaiveTime::MIN))
}

/// Last millisecond of the week that begins on `week_start`.
pub fn get_end_of_week_on(input: impl IntoTimestamp, week_start: Weekday) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    let last = week_start_date(&ts, week_start)?
        .checked_add_signed(TimeDelta::days(6))
        .ok_or_else(|| overflow(&ts))?;
    end_of(&ts, last)
}

/// Start of the Sunday-based week.
pub fn get_start_of_week(input: impl IntoTimestamp) -> Result<Timestamp> {
    get_start_of_week_on(input, WEEK_START)
}

/// End of the Sunday-based week (Saturday `23:59:59.999`).
pub fn get_end_of_week(input: impl IntoTimestamp) -> Result<Timestamp> {
    get_end_of_week_on(input, WEEK_START)
}

pub fn get_start_of_month(input: impl IntoTimestamp) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    in_offset_of(&ts, first_of_month(&ts)?.and_time(NaiveTime::MIN))
}

pub fn get_end_of_month(input: impl IntoTimestamp) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    let last = first_of_month(&ts)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| overflow(&ts))?;
    end_of(&ts, last)
}

pub fn get_start_of_year(input: impl IntoTimestamp) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    let first = NaiveDate::from_ymd_opt(ts.year(), 1, 1).ok_or_else(|| overflow(&ts))?;
    in_offset_of(&ts, first.and_time(NaiveTime::MIN))
}

pub fn get_end_of_year(input: impl IntoTimestamp) -> Result<Timestamp> {
    let ts = input.into_timestamp()?;
    let last = NaiveDate::from_ymd_opt(ts.year(), 12, 31).ok_or_else(|| overflow(&ts))?;
    end_of(&ts, last)
}
