//! Pattern formatting in the Unicode date field language.
//!
//! Supported letters:
//!
//! | Letter | Field | Examples |
//! |--------|-------|----------|
//! | `y` | year | `2024`, `yy` → `24` |
//! | `M`, `L` | month | `1`, `01`, `Jan`, `January`, `J` |
//! | `Q` | quarter | `1`, `01`, `Q1`, `1st quarter` |
//! | `d` | day of month | `5`, `05` |
//! | `E` | weekday | `Mon`, `Monday`, `M`, `Mo` |
//! | `a` | AM/PM | `AM`, `am`, `a.m.`, `a` |
//! | `H`, `k` | hour 0-23, 1-24 | `9`, `09` |
//! | `h`, `K` | hour 1-12, 0-11 | `9`, `09` |
//! | `m`, `s` | minute, second | `5`, `05` |
//! | `S` | fraction of second | `1`, `12`, `123` |
//! | `X`, `x` | offset (`X` prints `Z` for UTC) | `+05`, `+0530`, `+05:30` |
//! | `t`, `T` | Unix seconds, Unix milliseconds | |
//!
//! Text between single quotes is copied as-is and `''` is a literal quote.
//! Any other ASCII letter is an [`Error::InvalidPattern`].

use crate::Timestamp;
use crate::error::{Error, Result};
use crate::iso::IntoTimestamp;
use chrono::{Datelike, Timelike};
use constkit::display::date_formats;

/// Pattern used by [`format_date`].
pub const DEFAULT_DATE_PATTERN: &str = date_formats::ISO;
/// Pattern used by [`format_time`].
pub const DEFAULT_TIME_PATTERN: &str = date_formats::TIME_24;
/// Pattern used by [`format_date_time`].
pub const DEFAULT_DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const QUARTERS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(char, usize),
    Literal(String),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                literal.push('\'');
                continue;
            }
            // Quoted run up to the closing quote or the end of the pattern.
            while let Some(q) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                } else {
                    break;
                }
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.next_if_eq(&c).is_some() {
                count += 1;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field(c, count));
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

fn pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{value:0>width$}")
}

fn render_offset(seconds: i32, count: usize, zulu: bool) -> String {
    if zulu && seconds == 0 {
        return "Z".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let (hours, minutes) = (abs / 3600, abs / 60 % 60);
    match count {
        1 if minutes == 0 => format!("{sign}{hours:02}"),
        1 | 2 | 4 => format!("{sign}{hours:02}{minutes:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}"),
    }
}

fn render_field(ts: &Timestamp, letter: char, count: usize) -> Result<String> {
    let month = ts.month0() as usize;
    let weekday = ts.weekday().num_days_from_monday() as usize;
    let hour = ts.hour();
    let year_of_era = if ts.year() > 0 { ts.year() } else { 1 - ts.year() };

    let text = match (letter, count) {
        ('y', 2) => pad(year_of_era % 100, 2),
        ('y', n) => pad(year_of_era, n),
        ('M' | 'L', 1 | 2) => pad(month + 1, count),
        ('M' | 'L', 3) => MONTHS[month][..3].to_string(),
        ('M' | 'L', 4) => MONTHS[month].to_string(),
        ('M' | 'L', 5) => MONTHS[month][..1].to_string(),
        ('Q', 1 | 2) => pad(month / 3 + 1, count),
        ('Q', 3) => format!("Q{}", month / 3 + 1),
        ('Q', 4) => format!("{} quarter", QUARTERS[month / 3]),
        ('d', 1 | 2) => pad(ts.day(), count),
        ('E', 1..=3) => WEEKDAYS[weekday][..3].to_string(),
        ('E', 4) => WEEKDAYS[weekday].to_string(),
        ('E', 5) => WEEKDAYS[weekday][..1].to_string(),
        ('E', 6) => WEEKDAYS[weekday][..2].to_string(),
        ('a', 1..=5) => {
            let pm = hour >= 12;
            match (count, pm) {
                (1 | 2, false) => "AM",
                (1 | 2, true) => "PM",
                (3, false) => "am",
                (3, true) => "pm",
                (4, false) => "a.m.",
                (4, true) => "p.m.",
                (_, false) => "a",
                (_, true) => "p",
            }
            .to_string()
        }
        ('H', 1 | 2) => pad(hour, count),
        ('k', 1 | 2) => pad(if hour == 0 { 24 } else { hour }, count),
        ('h', 1 | 2) => pad(if hour % 12 == 0 { 12 } else { hour % 12 }, count),
        ('K', 1 | 2) => pad(hour % 12, count),
        ('m', 1 | 2) => pad(ts.minute(), count),
        ('s', 1 | 2) => pad(ts.second(), count),
        ('S', n) => {
            let nanos = format!("{:09}", ts.nanosecond() % 1_000_000_000);
            if n <= 9 {
                nanos[..n].to_string()
            } else {
                format!("{nanos:0<n$}")
            }
        }
        ('X', 1..=5) => render_offset(ts.offset().local_minus_utc(), count, true),
        ('x', 1..=5) => render_offset(ts.offset().local_minus_utc(), count, false),
        ('t', _) => ts.timestamp().to_string(),
        ('T', _) => ts.timestamp_millis().to_string(),
        _ => {
            return Err(Error::InvalidPattern(format!(
                "`{}` is not a supported field",
                letter.to_string().repeat(count)
            )));
        }
    };
    Ok(text)
}

/// Render `ts` in its own offset using `pattern`.
///
/// ```
/// use datekit::{format_pattern, parse_iso};
///
/// let ts = parse_iso("2024-01-15T10:30:00").unwrap();
/// assert_eq!(format_pattern(&ts, "EEEE, MMMM d 'at' h:mm a").unwrap(),
///            "Monday, January 15 at 10:30 AM");
/// assert!(format_pattern(&ts, "yyyy-MM-dd Z").is_err());
/// ```
pub fn format_pattern(ts: &Timestamp, pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Field(letter, count) => out.push_str(&render_field(ts, letter, count)?),
        }
    }
    Ok(out)
}

/// Resolve `input` and render it; `""` on any error.
pub fn format_date_with(input: impl IntoTimestamp, pattern: &str) -> String {
    input
        .into_timestamp()
        .and_then(|ts| format_pattern(&ts, pattern))
        .unwrap_or_default()
}

/// `2024-01-15`
pub fn format_date(input: impl IntoTimestamp) -> String {
    format_date_with(input, DEFAULT_DATE_PATTERN)
}

/// [`format_date_with`] under a name that reads well for time patterns.
pub fn format_time_with(input: impl IntoTimestamp, pattern: &str) -> String {
    format_date_with(input, pattern)
}

/// `10:30`
pub fn format_time(input: impl IntoTimestamp) -> String {
    format_date_with(input, DEFAULT_TIME_PATTERN)
}

/// [`format_date_with`] under a name that reads well for date-time patterns.
pub fn format_date_time_with(input: impl IntoTimestamp, pattern: &str) -> String {
    format_date_with(input, pattern)
}

/// `2024-01-15 10:30`
pub fn format_date_time(input: impl IntoTimestamp) -> String {
    format_date_with(input, DEFAULT_DATE_TIME_PATTERN)
}
