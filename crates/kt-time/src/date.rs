//! Serial-number calendar dates.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use kt_core::{Error, Result};

use crate::weekday::Weekday;

/// First supported year.
pub const MIN_YEAR: u16 = 1970;
/// Last supported year.
pub const MAX_YEAR: u16 = 2200;

/// Serial of 2200-12-31, the last representable day.
const MAX_SERIAL: i32 = 84_370;

/// Cumulative days before each month in a non-leap year.
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar date, stored as the number of days since 1970-01-01.
///
/// The supported domain is 1970-01-01 through 2200-12-31. Ordering and
/// day differences operate directly on the serial; the year/month/day
/// view is recomputed on demand. The textual and serde form is the ISO
/// `YYYY-MM-DD` string, which also sorts correctly as a JSON map key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ───────────────────────── Calendar helpers ─────────────────────────

/// True for Gregorian leap years.
#[must_use]
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month.
#[must_use]
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => {
            debug_assert!(false, "month {month} out of range");
            0
        }
    }
}

/// Leap years in `[1, year)`.
fn leap_years_before(year: u16) -> i32 {
    let y = i32::from(year) - 1;
    y / 4 - y / 100 + y / 400
}

/// Serial of January 1st of `year`.
fn days_before_year(year: u16) -> i32 {
    (i32::from(year) - 1970) * 365 + leap_years_before(year) - leap_years_before(MIN_YEAR)
}

/// Days before the first of `month`, adjusted for leap years.
fn month_start_offset(month: u8, leap: bool) -> u16 {
    let base = MONTH_OFFSET[usize::from(month) - 1];
    if leap && month > 2 {
        base + 1
    } else {
        base
    }
}

/// Serial for a year/month/day already known to be valid.
pub(crate) fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    days_before_year(year)
        + i32::from(month_start_offset(month, is_leap_year(year)))
        + i32::from(day)
        - 1
}

/// Splits a serial back into year, month, and day-of-month.
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Guess the year from the average length, then walk back if the
    // guess overshot. It overshoots by at most one.
    let mut year = MIN_YEAR + (serial / 365) as u16;
    while days_before_year(year) > serial {
        year -= 1;
    }
    let day_of_year = serial - days_before_year(year);
    let leap = is_leap_year(year);
    let mut month = 1u8;
    while month < 12 && i32::from(month_start_offset(month + 1, leap)) <= day_of_year {
        month += 1;
    }
    let day = day_of_year - i32::from(month_start_offset(month, leap)) + 1;
    (year, month, day as u8)
}

// ───────────────────────────── Date ─────────────────────────────

impl Date {
    /// The first representable date, 1970-01-01.
    pub const MIN: Date = Date(0);
    /// The last representable date, 2200-12-31.
    pub const MAX: Date = Date(MAX_SERIAL);

    /// Builds a date from year, month, and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange {
                year: i32::from(year),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(Error::MonthOutOfRange { month });
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(Error::DayOutOfRange {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self(serial_from_ymd(year, month, day)))
    }

    /// Builds a date from a raw serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(0..=MAX_SERIAL).contains(&serial) {
            return Err(Error::SerialOutOfRange { serial });
        }
        Ok(Self(serial))
    }

    /// Serial known to be inside the domain.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!((0..=MAX_SERIAL).contains(&serial));
        Self(serial)
    }

    /// Days since 1970-01-01.
    #[must_use]
    pub fn serial(self) -> i32 {
        self.0
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Calendar month, 1 through 12.
    #[must_use]
    pub fn month(self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Day of the month, 1-based.
    #[must_use]
    pub fn day_of_month(self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        const TABLE: [Weekday; 7] = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        // 1970-01-01 was a Thursday.
        TABLE[(self.0 + 3).rem_euclid(7) as usize]
    }

    /// The date shifted by a signed number of days.
    pub fn add_days(self, days: i32) -> Result<Self> {
        match self.0.checked_add(days) {
            Some(serial) if (0..=MAX_SERIAL).contains(&serial) => Ok(Self(serial)),
            Some(serial) => Err(Error::SerialOutOfRange { serial }),
            None => Err(Error::SerialOutOfRange {
                serial: if days > 0 { i32::MAX } else { i32::MIN },
            }),
        }
    }

    /// The first day of this date's month.
    #[must_use]
    pub fn first_of_month(self) -> Self {
        Self(self.0 - i32::from(self.day_of_month()) + 1)
    }

    /// The last day of this date's month.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        let (year, month, day) = ymd_from_serial(self.0);
        Self(self.0 + i32::from(days_in_month(year, month)) - i32::from(day))
    }

    /// The `nth` occurrence of `weekday` in the given month, for example
    /// the second Monday of January.
    pub fn nth_weekday(nth: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let first = Self::from_ymd(year, month, 1)?;
        let lead =
            (7 + i32::from(weekday.ordinal()) - i32::from(first.weekday().ordinal())) % 7;
        let day = 1 + lead + 7 * (i32::from(nth) - 1);
        if nth == 0 || day > i32::from(days_in_month(year, month)) {
            return Err(Error::DayOutOfRange {
                day: day.clamp(0, i32::from(u8::MAX)) as u8,
                month,
                year,
                max_day: days_in_month(year, month),
            });
        }
        Self::from_ymd(year, month, day as u8)
    }
}

// ──────────────────────────── Operators ────────────────────────────

impl Add<i32> for Date {
    type Output = Date;

    /// Panics when the result leaves the supported domain; use
    /// [`Date::add_days`] to handle that case.
    fn add(self, days: i32) -> Date {
        self.0
            .checked_add(days)
            .filter(|serial| (0..=MAX_SERIAL).contains(serial))
            .map(Date)
            .expect("date addition out of range")
    }
}

impl Sub<i32> for Date {
    type Output = Date;

    /// Panics when the result leaves the supported domain.
    fn sub(self, days: i32) -> Date {
        self.0
            .checked_sub(days)
            .filter(|serial| (0..=MAX_SERIAL).contains(serial))
            .map(Date)
            .expect("date subtraction out of range")
    }
}

impl Sub<Date> for Date {
    type Output = i32;

    /// Signed number of days from `rhs` to `self`.
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ─────────────────────── Formatting and serde ───────────────────────

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = ymd_from_serial(self.0);
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses the strict `YYYY-MM-DD` form used on the wire.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || Error::DateParse {
            input: s.to_owned(),
        };
        let bytes = s.as_bytes();
        if !s.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(parse_error());
        }
        let year: u16 = s[0..4].parse().map_err(|_| parse_error())?;
        let month: u8 = s[5..7].parse().map_err(|_| parse_error())?;
        let day: u8 = s[8..10].parse().map_err(|_| parse_error())?;
        Self::from_ymd(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DateVisitor;

        impl Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date string in YYYY-MM-DD form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Date, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

// ───────────────────────────── Tests ─────────────────────────────
