//! Calendar months and month arithmetic.

use std::fmt;

use kt_core::{Error, Result};

use crate::date::{self, days_in_month, Date, MAX_YEAR, MIN_YEAR};

/// A calendar month inside the supported date domain.
///
/// Month arithmetic with year carry lives here; the entry window and the
/// overview navigation are both defined in whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Builds a month from its parts.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange {
                year: i32::from(year),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(Error::MonthOutOfRange { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> u16 {
        self.year
    }

    /// Calendar month, 1 through 12.
    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    /// This month shifted by a signed number of months, carrying across
    /// year boundaries.
    pub fn shifted(self, months: i32) -> Result<Self> {
        let index = i32::from(self.year) * 12 + i32::from(self.month) - 1 + months;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;
        if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        Ok(Self {
            year: year as u16,
            month: month as u8,
        })
    }

    /// The first day of the month.
    #[must_use]
    pub fn first_day(self) -> Date {
        Date::from_serial_unchecked(date::serial_from_ymd(self.year, self.month, 1))
    }

    /// The last day of the month.
    #[must_use]
    pub fn last_day(self) -> Date {
        let last = days_in_month(self.year, self.month);
        Date::from_serial_unchecked(date::serial_from_ymd(self.year, self.month, last))
    }

    /// Iterates every day of the month in order.
    pub fn days(self) -> impl Iterator<Item = Date> {
        (self.first_day().serial()..=self.last_day().serial()).map(Date::from_serial_unchecked)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
