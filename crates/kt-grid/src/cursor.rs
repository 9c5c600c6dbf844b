//! Month navigation for the overview screen.

use kt_schedule::window::WINDOW_MONTHS_AHEAD;
use kt_time::{Date, YearMonth};

/// Month selector clamped to the viewable span: the current month
/// through the last month the store accepts entries for.
///
/// Stepping past either bound is a no-op, which is what keeps the
/// navigation buttons and the entry window in agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    current: YearMonth,
    min: YearMonth,
    max: YearMonth,
}

impl MonthCursor {
    /// A cursor starting at `today`'s month.
    #[must_use]
    pub fn new(today: Date) -> Self {
        let min = YearMonth::of(today);
        let max = match min.shifted(WINDOW_MONTHS_AHEAD) {
            Ok(month) => month,
            Err(_) => YearMonth::of(Date::MAX),
        };
        Self {
            current: min,
            min,
            max,
        }
    }

    /// The month the cursor points at.
    #[must_use]
    pub fn current(self) -> YearMonth {
        self.current
    }

    /// True when stepping back stays inside the span.
    #[must_use]
    pub fn can_prev(self) -> bool {
        self.current > self.min
    }

    /// True when stepping forward stays inside the span.
    #[must_use]
    pub fn can_next(self) -> bool {
        self.current < self.max
    }

    /// Steps one month back; returns false when already at the lower
    /// bound.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        match self.current.shifted(-1) {
            Ok(month) => {
                self.current = month;
                true
            }
            Err(_) => false,
        }
    }

    /// Steps one month forward; returns false when already at the upper
    /// bound.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        match self.current.shifted(1) {
            Ok(month) => {
                self.current = month;
                true
            }
            Err(_) => false,
        }
    }
}

// ───────────────────────────── Tests ─────────────────────────────
