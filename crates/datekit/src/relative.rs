//! Humanized distances ("about 2 hours ago").

use crate::Timestamp;
use crate::clock::Clock;
use crate::iso::IntoTimestamp;
use chrono::{Datelike, Months};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

fn units(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

fn ratio(minutes: i64, per: f64) -> i64 {
    (minutes as f64 / per).round() as i64
}

/// Completed calendar months from `earlier` to `later`.
fn full_months(earlier: &Timestamp, later: &Timestamp) -> i64 {
    let later_local = later.with_timezone(earlier.offset());
    let mut months = i64::from(later_local.year() - earlier.year()) * 12
        + i64::from(later_local.month())
        - i64::from(earlier.month());

    let overshoots = u32::try_from(months)
        .ok()
        .and_then(|m| earlier.checked_add_months(Months::new(m)))
        .is_some_and(|anniversary| anniversary > *later);
    if months > 0 && overshoots {
        months -= 1;
    }
    months.max(0)
}

/// Distance between two instants in words, without direction.
///
/// Minutes are rounded, then the wording steps through: less than a minute,
/// N minutes, about N hours, N days, about N months, N months, and finally
/// about, over or almost N years.
pub fn format_distance(a: &Timestamp, b: &Timestamp) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (*later - *earlier).num_seconds();
    let minutes = ratio(seconds, MINUTES_IN_HOUR);

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            units(1, "minute")
        };
    }
    if minutes < 45 {
        return units(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", units(ratio(minutes, MINUTES_IN_HOUR), "hour"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return units(1, "day");
    }
    if minutes < MINUTES_IN_MONTH {
        return units(ratio(minutes, MINUTES_IN_DAY as f64), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!(
            "about {}",
            units(ratio(minutes, MINUTES_IN_MONTH as f64), "month")
        );
    }

    let months = full_months(earlier, later);
    if months < 12 {
        return units(ratio(minutes, MINUTES_IN_MONTH as f64), "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", units(years, "year")),
        3..=8 => format!("over {}", units(years, "year")),
        _ => format!("almost {}", units(years + 1, "year")),
    }
}

/// `"in 3 days"` or `"about 2 hours ago"` relative to the clock.
///
/// Returns `""` when `input` is not a valid date.
pub fn format_relative_time(input: impl IntoTimestamp, clock: &impl Clock) -> String {
    let Ok(ts) = input.into_timestamp() else {
        return String::new();
    };
    let now = clock.now();
    let distance = format_distance(&ts, &now);
    if ts > now {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}
