//! Sources of "today".

use chrono::Datelike;

use crate::date::{Date, MIN_YEAR};

/// Source of the current calendar date.
///
/// Entry-window bounds, past-day checks, and retention cutoffs all flow
/// from one injected clock, so tests pin the date instead of reading the
/// wall clock.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> Date;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year()).unwrap_or(0);
        match Date::from_ymd(year, now.month() as u8, now.day() as u8) {
            Ok(date) => date,
            // Only reachable on a host clock far outside the supported
            // domain; pin to the nearest bound.
            Err(_) => {
                if now.year() < i32::from(MIN_YEAR) {
                    Date::MIN
                } else {
                    Date::MAX
                }
            }
        }
    }
}

/// A clock pinned to one date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let pinned = Date::from_ymd(2026, 3, 15).unwrap();
        let clock = FixedClock(pinned);
        assert_eq!(clock.today(), pinned);
        assert_eq!(clock.today(), pinned);
    }

    #[test]
    fn clock_usable_through_reference() {
        fn today_of(clock: &dyn Clock) -> Date {
            clock.today()
        }
        let pinned = Date::from_ymd(2026, 3, 15).unwrap();
        assert_eq!(today_of(&FixedClock(pinned)), pinned);
    }

    #[test]
    fn system_clock_yields_in_domain_date() {
        let today = SystemClock.today();
        assert!(today >= Date::MIN);
        assert!(today <= Date::MAX);
    }
}
