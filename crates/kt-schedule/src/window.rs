//! The entry window and the retention cutoff.

use kt_time::{Date, YearMonth};

/// The date span the store accepts for fetches and saves: the first day
/// of the current month through the last day of the month three months
/// ahead.
///
/// The lower bound deliberately reaches back to the start of the current
/// month so already-passed days of it remain visible after a fetch, even
/// though saves reject anything before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryWindow {
    start: Date,
    end: Date,
}

/// Months ahead of the current one that stay editable.
pub const WINDOW_MONTHS_AHEAD: i32 = 3;

/// Months a schedule row survives after its month has passed.
pub const RETENTION_MONTHS: i32 = 2;

impl EntryWindow {
    /// The window anchored at `today`, saturating at the edge of the
    /// supported date domain.
    #[must_use]
    pub fn from_today(today: Date) -> Self {
        let start = today.first_of_month();
        let end = match YearMonth::of(today).shifted(WINDOW_MONTHS_AHEAD) {
            Ok(month) => month.last_day(),
            Err(_) => Date::MAX,
        };
        Self { start, end }
    }

    /// First accepted date.
    #[must_use]
    pub fn start(self) -> Date {
        self.start
    }

    /// Last accepted date.
    #[must_use]
    pub fn end(self) -> Date {
        self.end
    }

    /// True when `date` lies inside the window.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// First day of the month two months before `today`'s month. Rows dated
/// before this are dropped by the periodic cleanup.
///
/// Saturates at the start of the supported domain.
#[must_use]
pub fn retention_cutoff(today: Date) -> Date {
    match YearMonth::of(today).shifted(-RETENTION_MONTHS) {
        Ok(month) => month.first_day(),
        Err(_) => Date::MIN,
    }
}

// ───────────────────────────── Tests ─────────────────────────────
