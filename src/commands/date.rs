use anyhow::{Context as _, Result, bail};
use chrono::{FixedOffset, Local, Offset};
use datekit::{SystemClock, Timestamp};

use crate::Context;
use crate::cli::{CalendarUnit, DateCommand, FormatStyle, Period};
use crate::ui;

/// How computed timestamps are printed: wall time in their own offset.
const OUTPUT_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSXXX";

pub fn run(ctx: &Context, cmd: DateCommand) -> Result<()> {
    let clock = SystemClock;

    match cmd {
        DateCommand::Now => print_with(&datekit::now(&clock), &ctx.config.datetime_format),
        DateCommand::Today => print_with(&datekit::today(&clock)?, &ctx.config.date_format),
        DateCommand::Tomorrow => print_with(&datekit::tomorrow(&clock)?, &ctx.config.date_format),
        DateCommand::Yesterday => {
            print_with(&datekit::yesterday(&clock)?, &ctx.config.date_format)
        }
        DateCommand::Format {
            date,
            style,
            pattern,
        } => {
            let pattern = pattern.unwrap_or_else(|| match style {
                FormatStyle::Date => ctx.config.date_format.clone(),
                FormatStyle::Time => ctx.config.time_format.clone(),
                FormatStyle::DateTime => ctx.config.datetime_format.clone(),
            });
            print_with(&parse(&date)?, &pattern)
        }
        DateCommand::Relative { date } => {
            println!("{}", datekit::format_relative_time(parse(&date)?, &clock));
            Ok(())
        }
        DateCommand::Add { date, amount, unit } => {
            let ts = parse(&date)?;
            let shifted = match unit {
                CalendarUnit::Days => datekit::add_days_to_date(ts, amount),
                CalendarUnit::Months => datekit::add_months_to_date(ts, amount),
                CalendarUnit::Years => datekit::add_years_to_date(ts, amount),
            };
            print_with(&shifted?, OUTPUT_PATTERN)
        }
        DateCommand::Subtract { date, days } => print_with(
            &datekit::subtract_days_from_date(parse(&date)?, days)?,
            OUTPUT_PATTERN,
        ),
        DateCommand::Start { period, date } => {
            print_with(&period_bound(ctx, period, &date, Bound::Start)?, OUTPUT_PATTERN)
        }
        DateCommand::End { period, date } => {
            print_with(&period_bound(ctx, period, &date, Bound::End)?, OUTPUT_PATTERN)
        }
        DateCommand::Compare { first, second } => compare(ctx, &first, &second),
        DateCommand::Age { birth } => {
            println!("{}", datekit::get_age(parse(&birth)?, &clock)?);
            Ok(())
        }
        DateCommand::Iso { date } => {
            println!("{}", datekit::to_iso_string(&parse(&date)?));
            Ok(())
        }
        DateCommand::Check { date } => check(ctx, &date),
    }
}

/// Offset of the host's local time zone right now.
fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Read ISO-8601 text; text without an offset is local time.
fn parse(text: &str) -> Result<Timestamp> {
    datekit::parse_iso_in(text, local_offset()).with_context(|| format!("Invalid date '{text}'"))
}

fn print_with(ts: &Timestamp, pattern: &str) -> Result<()> {
    let text = datekit::format_pattern(ts, pattern)
        .with_context(|| format!("Cannot format with pattern '{pattern}'"))?;
    println!("{text}");
    Ok(())
}

#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

fn period_bound(ctx: &Context, period: Period, date: &str, bound: Bound) -> Result<Timestamp> {
    let ts = parse(date)?;
    let result = match (period, bound) {
        (Period::Day, Bound::Start) => datekit::get_start_of_day(ts),
        (Period::Day, Bound::End) => datekit::get_end_of_day(ts),
        (Period::Week, Bound::Start) => datekit::get_start_of_week_on(ts, ctx.config.week_start()?),
        (Period::Week, Bound::End) => datekit::get_end_of_week_on(ts, ctx.config.week_start()?),
        (Period::Month, Bound::Start) => datekit::get_start_of_month(ts),
        (Period::Month, Bound::End) => datekit::get_end_of_month(ts),
        (Period::Year, Bound::Start) => datekit::get_start_of_year(ts),
        (Period::Year, Bound::End) => datekit::get_end_of_year(ts),
    };
    Ok(result?)
}

fn compare(ctx: &Context, first: &str, second: &str) -> Result<()> {
    let a = parse(first)?;
    let b = parse(second)?;

    if ctx.verbose > 0 {
        ui::kv("first", &datekit::to_iso_string(&a));
        ui::kv("second", &datekit::to_iso_string(&b));
    }
    ui::kv("before", &datekit::is_date_before(a, b).to_string());
    ui::kv("after", &datekit::is_date_after(a, b).to_string());
    ui::kv("same day", &datekit::is_same_day_as(a, b).to_string());
    ui::kv("days", &datekit::get_days_difference(a, b)?.to_string());
    ui::kv("hours", &datekit::get_hours_difference(a, b)?.to_string());
    ui::kv("minutes", &datekit::get_minutes_difference(a, b)?.to_string());
    Ok(())
}

fn check(ctx: &Context, date: &str) -> Result<()> {
    let Ok(ts) = parse(date) else {
        bail!("'{date}' is not a valid date");
    };

    let clock = SystemClock;
    let when = if datekit::is_today(ts, &clock) {
        "today"
    } else if datekit::is_future(ts, &clock) {
        "in the future"
    } else if datekit::is_past(ts, &clock) {
        "in the past"
    } else {
        "now"
    };

    if !ctx.quiet {
        ui::success(&format!("{} is {when}", datekit::to_iso_string(&ts)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpersConfig;

    fn ctx(week_start: &str) -> Context {
        Context {
            verbose: 0,
            quiet: true,
            config: HelpersConfig {
                week_start: week_start.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_parse_keeps_explicit_offsets() {
        let ts = parse("2024-01-15T10:30:00+09:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 9 * 3600);
        assert!(parse("not a date").is_err());
    }

    #[test]
    fn test_week_bounds_follow_config() {
        // 2024-01-17 is a Wednesday.
        let sunday = period_bound(&ctx("sunday"), Period::Week, "2024-01-17T12:00:00Z", Bound::Start)
            .unwrap();
        assert_eq!(datekit::to_iso_string(&sunday), "2024-01-14T00:00:00.000Z");

        let monday = period_bound(&ctx("mon"), Period::Week, "2024-01-17T12:00:00Z", Bound::End)
            .unwrap();
        assert_eq!(datekit::to_iso_string(&monday), "2024-01-21T23:59:59.999Z");
    }

    #[test]
    fn test_output_pattern() {
        let ts = parse("2024-02-29T08:05:00Z").unwrap();
        assert_eq!(
            datekit::format_pattern(&ts, OUTPUT_PATTERN).unwrap(),
            "2024-02-29T08:05:00.000Z"
        );
    }

    #[test]
    fn test_check_rejects_garbage() {
        assert!(check(&ctx("sunday"), "2024-13-45").is_err());
        assert!(check(&ctx("sunday"), "2000-01-01").is_ok());

        let err = check(&ctx("sunday"), "yesterday-ish").unwrap_err();
        assert_eq!(err.to_string(), "'yesterday-ish' is not a valid date");
    }
}
