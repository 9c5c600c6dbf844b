//! The three-month entry view.

use serde::Serialize;

use kt_core::Result;
use kt_schedule::ScheduleMap;
use kt_time::{Date, YearMonth};

use crate::month::MonthGrid;

/// Months shown at once on the entry screen.
pub const MONTHS_SHOWN: u8 = 3;

/// The entry calendar: the current month and the two that follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    /// Month grids in display order, current month first.
    pub months: Vec<MonthGrid>,
}

impl CalendarView {
    /// Builds the view for `today` over one member's schedule.
    pub fn build(today: Date, schedules: &ScheduleMap) -> Result<Self> {
        let base = YearMonth::of(today);
        let mut months = Vec::with_capacity(usize::from(MONTHS_SHOWN));
        for offset in 0..MONTHS_SHOWN {
            let month = base.shifted(i32::from(offset))?;
            months.push(MonthGrid::build(month, today, schedules)?);
        }
        Ok(Self { months })
    }
}

// ───────────────────────────── Tests ─────────────────────────────
