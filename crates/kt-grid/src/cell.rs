//! Day cells and status decorations.

use serde::Serialize;

use kt_core::DayStatus;
use kt_time::{Date, Weekday};

/// Mark shown on the overview grid for each status.
///
/// Unset renders as an ideographic space so empty cells keep their
/// width.
#[must_use]
pub fn status_glyph(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Ok => "○",
        DayStatus::Ng => "×",
        DayStatus::Unset => "　",
    }
}

/// Tooltip text for each status on the overview grid.
#[must_use]
pub fn status_title(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Ok => "出勤可",
        DayStatus::Ng => "出勤不可",
        DayStatus::Unset => "未入力",
    }
}

/// One day on a rendered month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The calendar date.
    pub date: Date,
    /// Day of the week, duplicated for the renderer's column classes.
    pub weekday: Weekday,
    /// Holiday name when the day is a national holiday or substitute.
    pub holiday: Option<String>,
    /// Recorded availability.
    pub status: DayStatus,
    /// True for days before today.
    pub is_past: bool,
    /// True for today itself.
    pub is_today: bool,
}

impl DayCell {
    /// Day-of-month label.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }

    /// True when the cell carries a holiday name.
    #[must_use]
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// True when taps should register; past days are display-only.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.is_past
    }

    /// Cell text on the entry calendar: `"OK"`, `"NG"`, or empty.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Cell mark on the overview grid.
    #[must_use]
    pub fn status_glyph(&self) -> &'static str {
        status_glyph(self.status)
    }
}
