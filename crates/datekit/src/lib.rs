//! Date/time transforms
//!
//! Every function takes its input as anything implementing
//! [`IntoTimestamp`]: ISO-8601 text or a chrono value. Times carry a fixed
//! UTC offset ([`Timestamp`]) and calendar operations run in that offset.
//! Anything that depends on "now" takes a [`Clock`].
//!
//! # Example
//!
//! ```
//! use datekit::{FixedClock, add_months_to_date, format_date, format_relative_time};
//!
//! let clock = FixedClock::at("2024-06-15T12:00:00Z").unwrap();
//! assert_eq!(format_relative_time("2024-06-15T10:00:00Z", &clock), "about 2 hours ago");
//!
//! let end_of_feb = add_months_to_date("2024-01-31", 1).unwrap();
//! assert_eq!(format_date(end_of_feb), "2024-02-29");
//! ```

#![warn(clippy::all)]

mod calendar;
mod clock;
mod compare;
mod error;
mod iso;
mod pattern;
mod relative;

/// An instant with the UTC offset it was read or computed in.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

pub use calendar::{
    WEEK_START, add_days_to_date, add_months_to_date, add_years_to_date, get_end_of_day,
    get_end_of_month, get_end_of_week, get_end_of_week_on, get_end_of_year, get_start_of_day,
    get_start_of_month, get_start_of_week, get_start_of_week_on, get_start_of_year,
    subtract_days_from_date,
};
pub use chrono::Weekday;
pub use clock::{Clock, FixedClock, SystemClock, now, today, tomorrow, yesterday};
pub use compare::{
    get_age, get_days_difference, get_hours_difference, get_minutes_difference, is_date_after,
    is_date_before, is_future, is_past, is_same_day_as, is_today,
};
pub use error::{Error, Result};
pub use iso::{
    IntoTimestamp, from_iso_string, is_valid_date, parse_iso, parse_iso_in, to_iso_string,
};
pub use pattern::{
    DEFAULT_DATE_PATTERN, DEFAULT_DATE_TIME_PATTERN, DEFAULT_TIME_PATTERN, format_date,
    format_date_time, format_date_time_with, format_date_with, format_pattern, format_time,
    format_time_with,
};
pub use relative::{format_distance, format_relative_time};
