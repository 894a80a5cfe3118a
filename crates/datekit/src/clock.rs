//! Time sources.

use crate::Timestamp;
use crate::calendar::{shift_days, start_of_day};
use crate::error::Result;
use crate::iso::IntoTimestamp;
use chrono::Local;

/// Source of the current instant.
pub trait Clock {
    /// The current instant in the clock's offset.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Host clock in the host's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self(at)
    }

    /// Freeze at anything [`IntoTimestamp`] accepts.
    pub fn at(input: impl IntoTimestamp) -> Result<Self> {
        input.into_timestamp().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

pub fn now(clock: &impl Clock) -> Timestamp {
    clock.now()
}

/// Midnight today in the clock's offset.
pub fn today(clock: &impl Clock) -> Result<Timestamp> {
    start_of_day(&clock.now())
}

/// Midnight tomorrow.
pub fn tomorrow(clock: &impl Clock) -> Result<Timestamp> {
    shift_days(&today(clock)?, 1)
}

/// Midnight yesterday.
pub fn yesterday(clock: &impl Clock) -> Result<Timestamp> {
    shift_days(&today(clock)?, -1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::to_iso_string;
    use chrono::{Timelike, Utc};

    fn clock() -> FixedClock {
        FixedClock::at("2024-01-15T10:30:00+02:00").unwrap()
    }

    #[test]
    fn test_now() {
        assert_eq!(to_iso_string(&now(&clock())), "2024-01-15T08:30:00.000Z");
    }

    #[test]
    fn test_system_clock_is_current() {
        let drift = Utc::now() - SystemClock.now().with_timezone(&Utc);
        assert!(drift.num_seconds().abs() < 5);
    }

    #[test]
    fn test_today_is_midnight_in_clock_offset() {
        let today = today(&clock()).unwrap();
        assert_eq!((today.hour(), today.minute(), today.second()), (0, 0, 0));
        assert_eq!(today.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(to_iso_string(&today), "2024-01-14T22:00:00.000Z");
    }

    #[test]
    fn test_tomorrow_and_yesterday() {
        let c = clock();
        let today = today(&c).unwrap();
        assert_eq!((tomorrow(&c).unwrap() - today).num_days(), 1);
        assert_eq!((today - yesterday(&c).unwrap()).num_days(), 1);
        assert_eq!(tomorrow(&c).unwrap().hour(), 0);
    }

    #[test]
    fn test_clock_by_reference() {
        let c = clock();
        let by_ref: &dyn Clock = &c;
        assert_eq!(now(&by_ref), c.now());
    }
}
