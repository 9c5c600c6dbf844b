//! One rendered month.

use serde::Serialize;

use kt_core::Result;
use kt_holiday::HolidayTable;
use kt_schedule::ScheduleMap;
use kt_time::{Date, YearMonth};

use crate::cell::DayCell;

/// Column headers of the Sunday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Compact day label with the Japanese weekday, e.g. `3/1（日）`.
#[must_use]
pub fn day_label(date: Date) -> String {
    let weekday = WEEKDAY_HEADERS[usize::from(date.weekday().sunday_first_index())];
    format!("{}/{}（{}）", date.month(), date.day_of_month(), weekday)
}

/// One month of day cells, ready for a Sunday-first table renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Calendar year.
    pub year: u16,
    /// Calendar month, 1 through 12.
    pub month: u8,
    /// Empty cells before the 1st on the Sunday-first grid.
    pub leading_blanks: u8,
    /// One cell per day of the month, in order.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Builds the grid for one month.
    ///
    /// The holiday table is recomputed for the month's year on every
    /// build, matching how the entry screen decorates each rendered
    /// month independently.
    pub fn build(month: YearMonth, today: Date, schedules: &ScheduleMap) -> Result<Self> {
        let holidays = HolidayTable::for_year(month.year())?;
        let leading_blanks = month.first_day().weekday().sunday_first_index();
        let cells = month
            .days()
            .map(|date| DayCell {
                date,
                weekday: date.weekday(),
                holiday: holidays.name_of(date).map(str::to_owned),
                status: schedules.status_of(date),
                is_past: date < today,
                is_today: date == today,
            })
            .collect();
        Ok(Self {
            year: month.year(),
            month: month.month(),
            leading_blanks,
            cells,
        })
    }

    /// Heading in the 「2026年3月」 form.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }
}

// ───────────────────────────── Tests ─────────────────────────────
